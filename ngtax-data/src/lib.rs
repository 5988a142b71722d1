mod loader;

pub use loader::{
    BandRecord, BandTableLoader, PresumptiveLoader, PresumptiveRecord, ScheduleLoaderError,
    apply_bands,
};

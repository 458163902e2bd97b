pub mod activity_type;
pub mod energy;
pub mod entry;
pub mod raw_record;

pub use activity_type::ActivityType;
pub use energy::EnergyLevel;
pub use entry::ActivityEntry;
pub use raw_record::RawRecord;

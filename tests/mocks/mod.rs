//! In-memory test doubles for the storage seam.

mod mock_record_store;

pub use mock_record_store::MockRecordStore;

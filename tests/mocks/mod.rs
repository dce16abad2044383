pub mod mock_importer;

pub use mock_importer::MockImporter;

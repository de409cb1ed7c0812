pub mod file_payload;

pub use file_payload::FilePayloadDto;

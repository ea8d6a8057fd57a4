pub mod recording;
pub mod settings;

pub use recording::{Recording, RecordingSource};
pub use settings::{
    OpencastSettings, RecordingSettings, ReturnSettings, Settings, UploadSettings,
};

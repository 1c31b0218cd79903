use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub labels_path: PathBuf,
    pub reference_path: PathBuf,
    pub model_path: PathBuf,
    pub listen_addr: String,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels_path: PathBuf::from("labels.txt"),
            reference_path: PathBuf::from("pills_description.csv"),
            model_path: PathBuf::from("mobilenetv2_final.onnx"),
            listen_addr: "0.0.0.0:8000".to_string(),
            logger_timezone: utc(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(0).unwrap()
}

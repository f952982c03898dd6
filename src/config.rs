use std::env;
use std::path::PathBuf;

use secrecy::SecretString;

use crate::services::question_validator::OptionPolicy;

const DEFAULT_OPENAI_KEY: &str = "openai_api_key";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub courses_collection: String,
    pub materials_collection: String,
    pub upload_dir: PathBuf,
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub openai_model: String,
    pub openai_temperature: f32,
    pub openai_timeout_secs: u64,
    pub option_policy: OptionPolicy,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "college-resources".to_string()),
            courses_collection: env::var("COURSES_COLLECTION")
                .unwrap_or_else(|_| "courses".to_string()),
            materials_collection: env::var("MATERIALS_COLLECTION")
                .unwrap_or_else(|_| "studyMaterials".to_string()),
            upload_dir: env::var("FILE_UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_else(|_| DEFAULT_OPENAI_KEY.to_string()),
            ),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            openai_temperature: env::var("OPENAI_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            openai_timeout_secs: env::var("OPENAI_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
            option_policy: env::var("MCQ_STRICT_OPTIONS")
                .ok()
                .and_then(|s| s.parse::<bool>().ok())
                .map(|strict| {
                    if strict {
                        OptionPolicy::Strict
                    } else {
                        OptionPolicy::Lenient
                    }
                })
                .unwrap_or(OptionPolicy::Strict),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if the model API key is missing
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let api_key = self.openai_api_key.expose_secret();

        if api_key == DEFAULT_OPENAI_KEY || api_key.trim().is_empty() {
            panic!(
                "FATAL: OPENAI_API_KEY is not set! Set OPENAI_API_KEY environment variable."
            );
        }

        if self.openai_timeout_secs == 0 {
            panic!("FATAL: OPENAI_TIMEOUT_SECS must be greater than zero.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "college-resources-test".to_string(),
            courses_collection: "courses".to_string(),
            materials_collection: "studyMaterials".to_string(),
            upload_dir: PathBuf::from("uploads"),
            openai_api_key: SecretString::from("test_openai_key".to_string()),
            openai_api_base: "http://127.0.0.1:9".to_string(),
            openai_model: "gpt-4o".to_string(),
            openai_temperature: 0.7,
            openai_timeout_secs: 5,
            option_policy: OptionPolicy::Strict,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

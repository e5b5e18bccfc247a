use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Invalid backend response: {message}")]
    InvalidResponse { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl AppError {
    /// 啟動階段的錯誤（設定、憑證），不屬於單一請求
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            AppError::ConfigError { .. }
                | AppError::MissingConfigError { .. }
                | AppError::InvalidConfigValueError { .. }
                | AppError::ConfigValidationError { .. }
        )
    }

    /// 行程結束碼：設定錯誤 1，後端錯誤 2，其他系統錯誤 3
    pub fn exit_code(&self) -> i32 {
        if self.is_startup_error() {
            return 1;
        }
        match self {
            AppError::Http(_) | AppError::Backend { .. } | AppError::InvalidResponse { .. } => 2,
            _ => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Http(_) => "無法連線到文字生成服務".to_string(),
            AppError::Backend { status, .. } => {
                format!("文字生成服務回傳錯誤 (HTTP {})", status)
            }
            AppError::InvalidResponse { .. } => "文字生成服務回傳無法解析的內容".to_string(),
            AppError::IoError(_) => "檔案讀寫失敗".to_string(),
            AppError::MissingConfigError { field } => format!("缺少必要設定: {}", field),
            AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::ConfigValidationError { .. } => format!("設定錯誤: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::Http(_) => "Check network connectivity and the configured api_base",
            AppError::Backend { status: 401, .. } | AppError::Backend { status: 403, .. } => {
                "Check that HUGGINGFACEHUB_API_TOKEN is valid (run check_token)"
            }
            AppError::Backend { status: 503, .. } => {
                "The model may still be loading, try again shortly"
            }
            AppError::Backend { .. } | AppError::InvalidResponse { .. } => {
                "Check the model id and the backend status"
            }
            AppError::MissingConfigError { .. } => {
                "Set the value in the environment, a .env file, or on the command line"
            }
            AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::ConfigValidationError { .. } => "Fix the configuration file or flags",
            AppError::IoError(_) => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

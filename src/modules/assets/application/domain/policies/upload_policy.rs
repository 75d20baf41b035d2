use crate::modules::assets::application::domain::entities::FileUpload;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum UploadValidationError {
    #[error("No file content provided")]
    MissingFile,

    #[error("File exceeds the maximum allowed size of {max_bytes} bytes")]
    FileTooLarge { max_bytes: u64 },

    #[error("Media type '{0}' is not allowed")]
    UnsupportedMediaType(String),

    #[error("File name exceeds {max_len} characters")]
    FileNameTooLong { max_len: usize },
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
    pub public_base_path: String,
    pub storage_root: String,
}

impl UploadPolicy {
    pub const DEFAULT_PUBLIC_BASE_PATH: &'static str = "/uploads";
    pub const DEFAULT_STORAGE_ROOT: &'static str = "uploads";
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 20 * 1024 * 1024; // 20 MiB

    /// Documents, common office formats, images, one video type, plain text.
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "application/vnd.ms-powerpoint",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "application/vnd.ms-excel",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "image/jpeg",
        "image/png",
        "image/gif",
        "image/webp",
        "video/mp4",
        "text/plain",
    ];

    /// Load policy with paths from env, falling back to the fixed defaults.
    ///
    /// Env var names: `ASSET_PUBLIC_BASE_PATH`, `ASSET_STORAGE_ROOT`.
    pub fn from_env() -> Self {
        let public_base_path = std::env::var("ASSET_PUBLIC_BASE_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PUBLIC_BASE_PATH.to_string());

        let storage_root = std::env::var("ASSET_STORAGE_ROOT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_STORAGE_ROOT.to_string());

        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
            public_base_path,
            storage_root,
        }
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn new(public_base_path: String, storage_root: String) -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
            public_base_path,
            storage_root,
        }
    }

    /// Rejects a disallowed or oversized upload before any storage I/O.
    pub fn validate(&self, upload: &FileUpload) -> Result<(), UploadValidationError> {
        if upload.bytes.is_empty() {
            return Err(UploadValidationError::MissingFile);
        }

        if upload.size_bytes() > self.max_file_size_bytes {
            return Err(UploadValidationError::FileTooLarge {
                max_bytes: self.max_file_size_bytes,
            });
        }

        let content_type = upload.content_type.trim().to_ascii_lowercase();
        if !self
            .allowed_mime_types
            .iter()
            .any(|allowed| *allowed == content_type)
        {
            return Err(UploadValidationError::UnsupportedMediaType(
                upload.content_type.clone(),
            ));
        }

        if upload.file_name.len() > self.max_file_name_len {
            return Err(UploadValidationError::FileNameTooLong {
                max_len: self.max_file_name_len,
            });
        }

        Ok(())
    }
}

//! File service for handling the multipart product form.
//!
//! Streams the image field to disk under a unique name and collects the
//! text fields into a [`CreateProductRequest`] for validation.

use actix_multipart::{Field, Multipart};
use futures::StreamExt;
use log::warn;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

use crate::config::CONFIG;
use crate::constants::{
    CODE_FILE_UPLOAD_FAILED, CODE_INTERNAL_ERROR, ERR_FAILED_PROCESS_UPLOAD, ERR_FAILED_READ_FILE,
    ERR_FAILED_SAVE_FILE, ERR_NO_IMAGE_FILE,
};
use crate::errors::ApiError;
use crate::models::CreateProductRequest;
use crate::validators::{
    get_extension_from_content_type, validate_image_content_type, validate_image_size,
};

/// Service for file operations (upload, deletion).
pub struct FileService {
    upload_dir: PathBuf,
}

impl FileService {
    /// Create a new FileService instance using the default upload directory from config.
    pub fn new() -> Self {
        Self {
            upload_dir: PathBuf::from(&CONFIG.upload_dir),
        }
    }

    /// Create a new FileService with a custom upload directory.
    #[allow(dead_code)]
    pub fn with_upload_dir(upload_dir: PathBuf) -> Self {
        Self { upload_dir }
    }

    /// Process the multipart product creation form.
    ///
    /// Text fields are collected into a [`CreateProductRequest`] (left at
    /// their defaults when absent or unparsable, so request validation
    /// reports them uniformly); the `image` field is validated and
    /// streamed to the upload directory.
    ///
    /// Returns the assembled request and the URL path of the saved image
    /// (e.g. "/uploads/filename.jpg").
    pub async fn save_product_form(
        &self,
        payload: &mut Multipart,
    ) -> Result<(CreateProductRequest, String), ApiError> {
        let mut req = CreateProductRequest::default();
        let mut image: Option<String> = None;

        while let Some(item) = payload.next().await {
            let mut field = item.map_err(|e| {
                warn!("Failed to process multipart field: {}", e);
                ApiError::BadRequest {
                    code: CODE_FILE_UPLOAD_FAILED.to_string(),
                    message: ERR_FAILED_PROCESS_UPLOAD.to_string(),
                }
            })?;

            let field_name = field
                .content_disposition()
                .and_then(|cd| cd.get_name())
                .unwrap_or("")
                .to_string();

            match field_name.as_str() {
                "image" => {
                    image = Some(self.save_image(&mut field).await?);
                }
                "title" => req.title = read_text(&mut field).await?,
                "description" => req.description = read_text(&mut field).await?,
                "unit" => req.unit = read_text(&mut field).await?,
                "price" => {
                    req.price = read_text(&mut field).await?.trim().parse().unwrap_or(0.0);
                }
                "stock" => {
                    req.stock = read_text(&mut field).await?.trim().parse().unwrap_or(0);
                }
                _ => continue,
            }
        }

        let image = image.ok_or(ApiError::BadRequest {
            code: CODE_FILE_UPLOAD_FAILED.to_string(),
            message: ERR_NO_IMAGE_FILE.to_string(),
        })?;

        Ok((req, image))
    }

    /// Validate and stream one image field to the upload directory.
    async fn save_image(&self, field: &mut Field) -> Result<String, ApiError> {
        let content_type = field.content_type().map(|ct| ct.to_string());
        validate_image_content_type(content_type.as_deref())?;

        let extension = get_extension_from_content_type(content_type.as_deref());
        let filename = format!("image-{}.{}", Uuid::new_v4(), extension);

        if !self.upload_dir.exists() {
            std::fs::create_dir_all(&self.upload_dir).map_err(|e| {
                warn!("Failed to create upload directory: {}", e);
                ApiError::InternalServerError {
                    code: CODE_INTERNAL_ERROR.to_string(),
                    message: ERR_FAILED_SAVE_FILE.to_string(),
                }
            })?;
        }

        let filepath = self.upload_dir.join(&filename);

        let mut file = std::fs::File::create(&filepath).map_err(|e| {
            warn!("Failed to create file: {}", e);
            ApiError::InternalServerError {
                code: CODE_INTERNAL_ERROR.to_string(),
                message: ERR_FAILED_SAVE_FILE.to_string(),
            }
        })?;

        let mut total_size: usize = 0;

        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| {
                warn!("Failed to read chunk: {}", e);
                let _ = std::fs::remove_file(&filepath);
                ApiError::BadRequest {
                    code: CODE_FILE_UPLOAD_FAILED.to_string(),
                    message: ERR_FAILED_READ_FILE.to_string(),
                }
            })?;

            total_size += data.len();
            if let Err(e) = validate_image_size(total_size) {
                // Clean up the partial file
                let _ = std::fs::remove_file(&filepath);
                return Err(e);
            }

            file.write_all(&data).map_err(|e| {
                warn!("Failed to write file: {}", e);
                ApiError::InternalServerError {
                    code: CODE_INTERNAL_ERROR.to_string(),
                    message: ERR_FAILED_SAVE_FILE.to_string(),
                }
            })?;
        }

        Ok(format!("/uploads/{}", filename))
    }

    /// Delete a file from the upload directory.
    ///
    /// The file_path should be in the format "/uploads/filename.ext".
    /// Silently ignores if the file doesn't exist.
    pub fn delete_file(&self, file_path: &str) {
        if let Some(filename) = file_path.strip_prefix("/uploads/") {
            let filepath = self.upload_dir.join(filename);
            if filepath.exists() {
                let _ = std::fs::remove_file(&filepath);
            }
        }
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect a text field's chunks into a string.
async fn read_text(field: &mut Field) -> Result<String, ApiError> {
    let mut bytes = Vec::new();

    while let Some(chunk) = field.next().await {
        let data = chunk.map_err(|e| {
            warn!("Failed to read form field: {}", e);
            ApiError::BadRequest {
                code: CODE_FILE_UPLOAD_FAILED.to_string(),
                message: ERR_FAILED_READ_FILE.to_string(),
            }
        })?;
        bytes.extend_from_slice(&data);
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

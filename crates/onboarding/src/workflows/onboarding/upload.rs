use mime::Mime;
use serde::{Deserialize, Serialize};

use super::domain::ProfilePicture;

pub const MAX_PROFILE_PICTURE_BYTES: u64 = 2 * 1024 * 1024;

/// Immediate rejection of a profile picture; the file is never stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("Please upload a JPG or PNG image")]
    UnsupportedType { content_type: String },
    #[error("Please upload an image smaller than 2MB")]
    TooLarge { size_bytes: u64, max_bytes: u64 },
}

/// Checks the declared MIME type first, then the size.
pub fn check_profile_picture(picture: &ProfilePicture) -> Result<(), UploadRejection> {
    if !is_supported_image(&picture.content_type) {
        return Err(UploadRejection::UnsupportedType {
            content_type: picture.content_type.clone(),
        });
    }

    if picture.size_bytes > MAX_PROFILE_PICTURE_BYTES {
        return Err(UploadRejection::TooLarge {
            size_bytes: picture.size_bytes,
            max_bytes: MAX_PROFILE_PICTURE_BYTES,
        });
    }

    Ok(())
}

fn is_supported_image(content_type: &str) -> bool {
    let Ok(parsed) = content_type.trim().parse::<Mime>() else {
        return false;
    };

    if parsed.type_() != mime::IMAGE {
        return false;
    }

    let subtype = parsed.subtype();
    subtype == mime::JPEG || subtype == mime::PNG || subtype.as_str() == "jpg"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// User-facing toast raised outside the validation contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Presentation hook that surfaces notices to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Drops every notice; for callers that only care about the return value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notice: Notice) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picture(content_type: &str, size_bytes: u64) -> ProfilePicture {
        ProfilePicture {
            file_name: "avatar".to_string(),
            content_type: content_type.to_string(),
            size_bytes,
        }
    }

    #[test]
    fn accepts_jpeg_png_and_jpg_alias() {
        for content_type in ["image/jpeg", "image/png", "image/jpg"] {
            assert_eq!(check_profile_picture(&picture(content_type, 1024)), Ok(()));
        }
    }

    #[test]
    fn rejects_other_types_before_size() {
        match check_profile_picture(&picture("image/gif", MAX_PROFILE_PICTURE_BYTES + 1)) {
            Err(UploadRejection::UnsupportedType { content_type }) => {
                assert_eq!(content_type, "image/gif")
            }
            other => panic!("expected unsupported type, got {other:?}"),
        }
        assert!(check_profile_picture(&picture("not a mime", 10)).is_err());
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(check_profile_picture(&picture("image/png", MAX_PROFILE_PICTURE_BYTES)).is_ok());
        assert_eq!(
            check_profile_picture(&picture("image/png", MAX_PROFILE_PICTURE_BYTES + 1)),
            Err(UploadRejection::TooLarge {
                size_bytes: MAX_PROFILE_PICTURE_BYTES + 1,
                max_bytes: MAX_PROFILE_PICTURE_BYTES,
            })
        );
    }
}

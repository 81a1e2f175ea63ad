use web_sys::{Blob, Url};

/// A `blob:` URL that is revoked when dropped.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn from_blob(blob: &Blob) -> Result<Self, String> {
        Url::create_object_url_with_blob(blob)
            .map(|url| Self { url })
            .map_err(|_| "Failed to create preview URL".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}

/// Holds at most one live preview URL. Replacing or clearing the slot
/// releases the previous one.
#[derive(Debug, Default)]
pub struct PreviewSlot {
    current: Option<ObjectUrl>,
}

impl PreviewSlot {
    pub fn replace(&mut self, blob: &Blob) -> Option<String> {
        self.current = None;
        match ObjectUrl::from_blob(blob) {
            Ok(url) => {
                let src = url.as_str().to_string();
                self.current = Some(url);
                Some(src)
            }
            Err(err) => {
                log::warn!("{}", err);
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

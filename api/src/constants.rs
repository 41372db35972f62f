//! Application constants

/// Clipping server used when `CLIP_SERVER_URL` is not set
pub const DEFAULT_CLIP_SERVER_URL: &str = "http://109.199.102.132:9000";

/// Path of the clip operation on the clipping server
pub const CLIP_PATH: &str = "/clip";

/// Scheme prefixed onto the scheme-less locator returned by the clipping server
pub const DOWNLOAD_URL_SCHEME: &str = "http://";

/// Filename the browser (or CLI) saves the clip under
pub const DOWNLOAD_FILENAME: &str = "clipx-video.mp4";

/// Content type used when the video host omits one
pub const DEFAULT_VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Hosts a post URL must mention to be accepted
pub const SUPPORTED_HOSTS: [&str; 2] = ["twitter.com", "x.com"];

/// Maximum request body accepted by the JSON and form endpoints (64 KB)
pub const MAX_REQUEST_BODY_SIZE: usize = 64 * 1024;

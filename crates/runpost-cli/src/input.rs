//! Post dataset loading.

use std::io::Read;
use std::path::Path;

use runpost_core::{Post, parse_posts};

use crate::error::{ClientError, ClientResult};

/// Reads a JSON array of posts from `path`, or from stdin when it is `-`.
pub fn load_posts(path: &Path) -> ClientResult<Vec<Post>> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    let posts = parse_posts(&json)?;
    let invalid = posts.iter().filter(|p| !p.has_valid_timestamp()).count();
    tracing::info!(
        path = %path.display(),
        posts = posts.len(),
        invalid_timestamps = invalid,
        "Loaded posts"
    );
    Ok(posts)
}

/// Picks the input path: flag first, then the config file.
pub fn resolve_input<'a>(
    flag: Option<&'a Path>,
    configured: Option<&'a Path>,
) -> ClientResult<&'a Path> {
    flag.or(configured).ok_or_else(|| {
        ClientError::Config(
            "no input given; pass --input <PATH> or set `input` in config.toml".to_string(),
        )
    })
}

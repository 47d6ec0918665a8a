use super::load_snippet_file;
use crate::Result;
use snip_blocks::list_names;
use std::path::Path;

/// List every template name in `snippet_file`, in file order.
///
/// An empty list means the file holds no templates; a missing file is an
/// error.
pub fn list(snippet_file: &Path) -> Result<Vec<String>> {
    let lines = load_snippet_file(snippet_file)?;
    Ok(list_names(&lines))
}

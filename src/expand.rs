use crate::{context::Context, debug, directive::find_directives, error::ApplicationError};
use std::path::Path;

/// Replaces every include directive in the file at `path` with the contents
/// of the file it names.
///
/// Included contents are not scanned again, so directives inside them are
/// kept verbatim. Include paths are used as written, relative to the current
/// working directory.
pub async fn expand(context: &Context, path: &Path) -> Result<String, ApplicationError> {
    debug!(context, "reading \"{}\"", path.display());
    let source = context.file_system().read_file_to_string(path).await?;

    let mut output = String::with_capacity(source.len());
    let mut offset = 0;

    for directive in find_directives(&source) {
        let span = directive.span();

        debug!(context, "including \"{}\"", directive.path());
        let content = context
            .file_system()
            .read_file_to_string(Path::new(directive.path()))
            .await?;

        output.push_str(&source[offset..span.start]);
        output.push_str(&content);
        offset = span.end;
    }

    output.push_str(&source[offset..]);

    Ok(output)
}

mod arguments;
mod context;
mod directive;
mod error;
mod expand;
mod infrastructure;
mod log;
mod options;

use arguments::Arguments;
use clap::{CommandFactory, Parser};
use context::Context;
use error::ApplicationError;
use expand::expand;
use infrastructure::{OsConsole, OsFileSystem};
use options::Options;
use std::{env::set_current_dir, path::Path, process::exit, time::Instant};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let arguments = Arguments::parse();
    let context = Context::new(
        OsConsole::new(),
        OsFileSystem::new(),
        Options {
            debug: arguments.debug,
            profile: arguments.profile,
        },
    );

    if let Err(error) = execute(&context, &arguments).await {
        let mut console = context.console().lock().await;

        let result = if let ApplicationError::Usage(usage) = &error {
            console.write_stdout(format!("{}\n", usage).as_bytes()).await
        } else {
            console
                .write_stderr(
                    format!(
                        "{}{}\n",
                        arguments.log_prefix.as_deref().unwrap_or_default(),
                        error
                    )
                    .as_bytes(),
                )
                .await
        };

        // Nothing is left to report a console failure to.
        result.unwrap_or_default();

        exit(1)
    }
}

async fn execute(context: &Context, arguments: &Arguments) -> Result<(), ApplicationError> {
    let Some(file) = &arguments.file else {
        return Err(ApplicationError::Usage(
            Arguments::command().render_usage().to_string(),
        ));
    };

    if let Some(directory) = &arguments.directory {
        set_current_dir(directory)?;
    }

    let time = Instant::now();
    let output = expand(context, Path::new(file)).await?;

    profile!(
        context,
        "expanded \"{}\" in {}ms",
        file,
        time.elapsed().as_millis()
    );

    context
        .console()
        .lock()
        .await
        .write_stdout(output.as_bytes())
        .await?;

    Ok(())
}

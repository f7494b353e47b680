use ghuser::cli::Runner;
use ghuser::config::USER_ENV;
use ghuser::error::Result;
use ghuser::lookup::UserLookup;
use ghuser::transport::http::ReqwestTransport;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let runner = Runner::new(|| -> Result<_> { UserLookup::github(ReqwestTransport::new()?) })
        .with_env_user(std::env::var(USER_ENV).ok());

    let stdout = io::stdout();
    let stderr = io::stderr();
    runner
        .run(
            std::env::args_os(),
            &mut stdout.lock(),
            &mut stderr.lock(),
        )
        .into()
}

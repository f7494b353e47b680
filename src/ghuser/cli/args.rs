use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ghuser", bin_name = "ghuser")]
#[command(about = "Uma aplicação CLI para buscar usuários no GitHub", long_about = None)]
pub struct Cli {
    /// Usuário do GitHub (padrão: $GHUSER_USER)
    #[arg(short, long, value_name = "USER")]
    pub user: Option<String>,
}

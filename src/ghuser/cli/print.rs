use crate::error::GhUserError;
use crate::model::Profile;
use colored::Colorize;
use std::io::{self, Write};

pub(super) fn print_profile(out: &mut dyn Write, profile: &Profile) -> io::Result<()> {
    writeln!(out, "Usuário: {}", profile.login)?;
    writeln!(out, "Nome: {}", profile.name)?;
    writeln!(out, "Seguidores: {}", profile.followers)?;
    writeln!(out, "Seguindo: {}", profile.following)?;
    out.flush()
}

pub(super) fn print_error(err: &mut dyn Write, error: &GhUserError) -> io::Result<()> {
    writeln!(err, "{}", error.to_string().red())
}

pub(super) fn print_clap(dest: &mut dyn Write, error: &clap::Error) -> io::Result<()> {
    write!(dest, "{}", error.render())
}

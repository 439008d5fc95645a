pub mod ast;
pub mod cli;
pub mod compile;
pub mod error;
pub mod moddle;
pub mod printer;
pub mod schema;

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.run()
}

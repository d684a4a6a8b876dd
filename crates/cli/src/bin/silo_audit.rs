use anyhow::Result;

fn main() -> Result<()> {
    silo_audit_cli::main_entry()
}

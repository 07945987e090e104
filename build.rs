use std::error::Error;
use vergen_gitcl::{BuildBuilder, Emitter, GitclBuilder as GitBuilder};

pub fn main() -> Result<(), Box<dyn Error>> {
    let build = BuildBuilder::default().build_date(true).build()?;
    let git = GitBuilder::default().sha(true).build()?;
    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&git)?
        .emit()?;
    Ok(())
}

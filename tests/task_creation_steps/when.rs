//! When steps for task creation behaviour scenarios.

use super::world::{CreationWorld, run_async};
use rstest_bdd_macros::when;

#[when("the submission is saved")]
fn save_submission(world: &mut CreationWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending
        .take()
        .ok_or_else(|| eyre::eyre!("missing pending submission in scenario world"))?;
    world.last_result = Some(run_async(world.service.submit(request)));
    Ok(())
}

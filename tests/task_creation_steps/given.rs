//! Given steps for task creation behaviour scenarios.

use super::world::CreationWorld;
use rstest_bdd_macros::given;
use taskboard::task::{domain::ImageUpload, services::CreateTaskRequest};

#[given(r#"a submission titled "{title}" detailing "{detail}""#)]
fn submission_with_fields(world: &mut CreationWorld, title: String, detail: String) {
    world.pending = Some(CreateTaskRequest::new(title, detail));
}

#[given("a submission with a blank title")]
fn submission_with_blank_title(world: &mut CreationWorld) {
    world.pending = Some(CreateTaskRequest::new("   ", "2 liters"));
}

#[given(r#"a submission titled "{title}" detailing "{detail}" with an attached image"#)]
fn submission_with_image(
    world: &mut CreationWorld,
    title: String,
    detail: String,
) -> Result<(), eyre::Report> {
    let image = ImageUpload::new("milk.png", "image/png", vec![1, 2, 3])
        .map_err(|err| eyre::eyre!("build image upload: {err}"))?;
    world.pending = Some(CreateTaskRequest::new(title, detail).with_image(image));
    Ok(())
}

#[given("the image store is rejecting uploads")]
fn image_store_rejects(world: &mut CreationWorld) {
    world.store.reject_uploads();
}

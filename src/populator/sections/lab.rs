//! Lab header: page title, logo text and intro paragraph.

use crate::document::Lab;
use crate::populator::regions;
use crate::populator::utils::escape;
use crate::populator::Fragment;

pub fn render(lab: Option<&Lab>) -> Vec<Fragment> {
    let Some(lab) = lab else {
        return Vec::new();
    };
    let name = escape(&lab.name);

    vec![
        Fragment::new(regions::TITLE, format!("<title>{}</title>", name)),
        Fragment::new(regions::LOGO, name),
        Fragment::new(regions::INTRO, escape(&lab.description)),
    ]
}

//! Map display data.

use crate::attributes::DisplayTree;
use crate::entities::{GameMap, MAP_NAME_PREFIX};

fn file_link(filename: &str) -> String {
    format!("[[File:{filename}.png|Frameless]]")
}

pub(super) fn derive(map: &GameMap) -> DisplayTree {
    let mut display = DisplayTree::new();

    // The first image is the overview; variants follow with a caption each
    let pics = match map.images.as_slice() {
        [] => String::new(),
        [only] => file_link(&only.filename),
        [_, variants @ ..] => variants
            .iter()
            .map(|image| {
                let caption = image
                    .filename
                    .split_once(MAP_NAME_PREFIX)
                    .map_or(image.filename.as_str(), |(_, rest)| rest)
                    .replace('_', " ");
                format!("'''{}'''\n{}\n\n", caption.trim(), file_link(&image.filename))
            })
            .collect(),
    };
    display.set("pics", pics);

    display
}

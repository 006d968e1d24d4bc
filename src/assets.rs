//! Embedded artwork decoding and texture caching
//!
//! The three sprite images ship inside the binary. Each character carries a
//! keyed image set (default plus directional variants); loading runs once at
//! startup, in order, through a de-duplicating cache so shared images are
//! only decoded and uploaded once.

use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec2;

use crate::renderer::{RenderState, SpriteTexture};
use crate::sim::Facing;

/// An embedded image, addressed by its asset path
#[derive(Debug, Clone, Copy)]
pub struct ImageSource {
    pub key: &'static str,
    pub bytes: &'static [u8],
}

pub const BIRD_LEFT: ImageSource = ImageSource {
    key: "assets/bird-left.png",
    bytes: include_bytes!("../assets/bird-left.png"),
};
pub const BIRD_RIGHT: ImageSource = ImageSource {
    key: "assets/bird-right.png",
    bytes: include_bytes!("../assets/bird-right.png"),
};
pub const CAN: ImageSource = ImageSource {
    key: "assets/can.png",
    bytes: include_bytes!("../assets/can.png"),
};

/// Keyed artwork for one character
#[derive(Debug, Clone, Copy)]
pub struct CharacterArt {
    pub name: &'static str,
    pub default_img: ImageSource,
    pub leftwards: ImageSource,
    pub rightwards: ImageSource,
}

/// The bird. Default artwork faces left, same as its leftwards variant.
pub const BIRD_ART: CharacterArt = CharacterArt {
    name: "Jeff",
    default_img: BIRD_LEFT,
    leftwards: BIRD_LEFT,
    rightwards: BIRD_RIGHT,
};

/// The can never turns, so every variant shares one image
pub const CAN_ART: CharacterArt = CharacterArt {
    name: "Can",
    default_img: CAN,
    leftwards: CAN,
    rightwards: CAN,
};

/// Decode an embedded image to raw RGBA8 pixels
pub fn decode_rgba(src: ImageSource) -> Result<(Vec<u8>, u32, u32), image::ImageError> {
    let img = image::load_from_memory(src.bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok((img.into_raw(), width, height))
}

/// De-duplicating texture cache keyed by asset path
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<&'static str, Rc<SpriteTexture>>,
}

impl TextureCache {
    /// Fetch a texture, decoding and uploading only on first use
    pub fn load(
        &mut self,
        render: &RenderState,
        src: ImageSource,
    ) -> Result<Rc<SpriteTexture>, image::ImageError> {
        if let Some(texture) = self.textures.get(src.key) {
            return Ok(texture.clone());
        }

        let (rgba, width, height) = decode_rgba(src)?;
        let texture = Rc::new(render.create_sprite_texture(&rgba, width, height, src.key));
        self.textures.insert(src.key, texture.clone());
        Ok(texture)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// A character with all of its textures staged
pub struct StagedCharacter {
    pub name: &'static str,
    default_tex: Rc<SpriteTexture>,
    leftwards: Rc<SpriteTexture>,
    rightwards: Rc<SpriteTexture>,
}

impl StagedCharacter {
    /// Pick the texture matching the sprite's declared facing
    pub fn for_facing(&self, facing: Facing) -> &SpriteTexture {
        match facing {
            Facing::Default => &self.default_tex,
            Facing::Leftwards => &self.leftwards,
            Facing::Rightwards => &self.rightwards,
        }
    }

    /// On-screen footprint, taken from the default image
    pub fn size(&self) -> Vec2 {
        self.default_tex.size
    }
}

/// Stage one character's full image set
pub fn load_character(
    cache: &mut TextureCache,
    render: &RenderState,
    art: CharacterArt,
) -> Result<StagedCharacter, image::ImageError> {
    log::info!("Starting load of {}", art.name);

    let default_tex = cache.load(render, art.default_img)?;
    let leftwards = cache.load(render, art.leftwards)?;
    let rightwards = cache.load(render, art.rightwards)?;

    log::info!("Finished loading {}", art.name);

    Ok(StagedCharacter {
        name: art.name,
        default_tex,
        leftwards,
        rightwards,
    })
}

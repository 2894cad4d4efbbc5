use image::ImageFormat;

#[derive(Debug, thiserror::Error)]
pub enum EnvMapError {
    #[error("failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },
    #[error("fetching {path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("failed to decode environment map: {0}")]
    Decode(#[from] image::ImageError),
    #[error("environment map has no texels")]
    Empty,
}

/// Equirectangular HDR lighting, RGBA32F, rows top to bottom.
#[derive(Clone, Debug)]
pub struct EnvironmentMap {
    pub width: u32,
    pub height: u32,
    pub texels: Vec<f32>,
}

impl EnvironmentMap {
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }

    pub fn texel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.texels
            .get(i..i + 4)
            .map(|t| [t[0], t[1], t[2], t[3]])
    }
}

/// Decode a Radiance `.hdr` file into float texels with alpha 1.
pub fn decode_hdr(bytes: &[u8]) -> Result<EnvironmentMap, EnvMapError> {
    let rgba = image::load_from_memory_with_format(bytes, ImageFormat::Hdr)?.to_rgba32f();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(EnvMapError::Empty);
    }
    Ok(EnvironmentMap {
        width,
        height,
        texels: rgba.into_raw(),
    })
}

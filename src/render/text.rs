use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{SvdVizError, SvdVizResult};

/// Rasterizes SVG text overlays with `resvg` and keeps them keyed by caption.
///
/// The font database is loaded once from the system fonts. Machines without fonts still
/// render; text elements are simply dropped by `usvg`.
pub(crate) struct TextOverlayCache {
    fontdb: Arc<usvg::fontdb::Database>,
    cache: HashMap<String, vello_cpu::Image>,
}

impl TextOverlayCache {
    pub(crate) fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self {
            fontdb: Arc::new(db),
            cache: HashMap::new(),
        }
    }

    pub(crate) fn font_faces(&self) -> usize {
        self.fontdb.faces().count()
    }

    /// Return the overlay for `key`, building it from `svg` on first use.
    pub(crate) fn get_or_rasterize(
        &mut self,
        key: &str,
        canvas: Canvas,
        svg: impl FnOnce() -> String,
    ) -> SvdVizResult<vello_cpu::Image> {
        if let Some(img) = self.cache.get(key) {
            return Ok(img.clone());
        }
        let tree = self.parse(&svg())?;
        let bytes = rasterize_svg_to_premul_rgba8(&tree, canvas.width, canvas.height)?;
        let img = rgba_premul_to_image(&bytes, canvas.width, canvas.height)?;
        self.cache.insert(key.to_owned(), img.clone());
        Ok(img)
    }

    fn parse(&self, svg: &str) -> SvdVizResult<usvg::Tree> {
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts).context("parse overlay svg")?;
        Ok(tree)
    }
}

pub(crate) fn rasterize_svg_to_premul_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> SvdVizResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SvdVizError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.data().to_vec())
}

pub(crate) fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> SvdVizResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| SvdVizError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| SvdVizError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(SvdVizError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> SvdVizResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

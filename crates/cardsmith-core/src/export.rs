//! Card export
//!
//! The card is described as an SVG scene sized by the presentation geometry,
//! then rasterized with resvg into a tiny-skia pixmap and encoded as PNG.
//! Only embedded (data URI) images are drawn; remote images are skipped so
//! export never touches the network.

use std::fmt::Write as _;
use std::io::Cursor;
use std::str::FromStr;

use html_escape::{encode_double_quoted_attribute, encode_text};
use image::{DynamicImage, ImageFormat, RgbaImage};
use tiny_skia::{Pixmap, Transform};
use tracing::debug;

use crate::error::{CardError, CardResult};
use crate::presentation::{Background, CardStyle, ContentDirection, SocialAlign};
use crate::types::{CardConfiguration, IdentityField};

/// File name offered when saving the exported card
pub const EXPORT_FILE_NAME: &str = "business-card.png";

/// Largest supported raster scale factor
pub const MAX_SCALE: f32 = 8.0;

const PADDING: u32 = 24;
const AVATAR: u32 = 96;
const GAP: u32 = 24;
const CHIP_HEIGHT: u32 = 28;
const CHIP_GAP: u32 = 8;
const CHIP_CHAR_WIDTH: u32 = 8;
const SOCIAL_MARGIN: u32 = 16;

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Png,
    Svg,
}

impl FromStr for ExportFormat {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "svg" => Ok(ExportFormat::Svg),
            other => Err(CardError::Export(format!("unsupported format: {}", other))),
        }
    }
}

/// (font size, line height, bold) per identity line
fn line_metrics(field: IdentityField) -> (u32, u32, bool) {
    match field {
        IdentityField::Name => (24, 32, true),
        IdentityField::Position => (18, 28, false),
        _ => (16, 24, false),
    }
}

struct ChipLayout {
    x: u32,
    y: u32,
    width: u32,
    label: String,
}

/// Lay chips out left to right, wrapping at `max_width`
fn layout_chips(style: &CardStyle, max_width: u32) -> (Vec<ChipLayout>, u32) {
    let mut rows: Vec<Vec<ChipLayout>> = Vec::new();
    let mut cursor = 0;
    for chip in &style.social {
        let label = format!("{}: {}", chip.platform, chip.username);
        let width = (label.chars().count() as u32 * CHIP_CHAR_WIDTH + 16).min(max_width);
        if rows.is_empty() || cursor + width > max_width {
            rows.push(Vec::new());
            cursor = 0;
        }
        let row_index = rows.len() as u32 - 1;
        if let Some(row) = rows.last_mut() {
            row.push(ChipLayout {
                x: cursor,
                y: row_index * (CHIP_HEIGHT + CHIP_GAP),
                width,
                label,
            });
        }
        cursor += width + CHIP_GAP;
    }

    let height = match rows.len() as u32 {
        0 => 0,
        n => n * CHIP_HEIGHT + (n - 1) * CHIP_GAP,
    };

    let mut chips = Vec::new();
    for row in rows {
        let used = row.iter().map(|c| c.width).sum::<u32>()
            + CHIP_GAP * (row.len() as u32).saturating_sub(1);
        let shift = match style.social_align {
            SocialAlign::Center => (max_width.saturating_sub(used)) / 2,
            SocialAlign::Start => 0,
        };
        chips.extend(row.into_iter().map(|mut c| {
            c.x += shift;
            c
        }));
    }
    (chips, height)
}

/// Build the SVG scene for a configuration
pub fn render_svg(config: &CardConfiguration) -> String {
    let style = CardStyle::from_config(config);
    let width = style.geometry.max_width_px;
    let inner_width = width - 2 * PADDING;

    let text_height: u32 = IdentityField::ALL.iter().map(|f| line_metrics(*f).1).sum();
    let identity_height = match style.direction {
        ContentDirection::Row => AVATAR.max(text_height),
        ContentDirection::Column => AVATAR + GAP + text_height,
    };
    let (chips, chips_height) = layout_chips(&style, inner_width);
    let social_height = if chips.is_empty() {
        0
    } else {
        2 * SOCIAL_MARGIN + chips_height
    };
    let content_height = identity_height + social_height;
    let height = style.geometry.height_px(content_height + 2 * PADDING);
    let top = PADDING + height.saturating_sub(content_height + 2 * PADDING) / 2;

    let font = encode_double_quoted_attribute(&style.font_family);
    let text_color = style.text_color.as_str();

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );

    svg.push_str("<defs>");
    if let Background::Gradient { direction, stops } = &style.background {
        let (x2, y2) = direction.end_point();
        let _ = write!(
            svg,
            r#"<linearGradient id="card-bg" x1="0" y1="0" x2="{}" y2="{}">"#,
            x2, y2
        );
        let last = stops.len().saturating_sub(1).max(1) as f32;
        for (i, stop) in stops.iter().enumerate() {
            let _ = write!(
                svg,
                r#"<stop offset="{:.3}" stop-color="{}"/>"#,
                i as f32 / last,
                stop
            );
        }
        svg.push_str("</linearGradient>");
    }
    let _ = write!(
        svg,
        r#"<clipPath id="card-clip"><rect width="{}" height="{}" rx="8"/></clipPath>"#,
        width, height
    );
    svg.push_str("</defs>");

    svg.push_str(r#"<g clip-path="url(#card-clip)">"#);
    match &style.background {
        Background::Solid(color) => {
            let _ = write!(
                svg,
                r#"<rect width="{}" height="{}" fill="{}"/>"#,
                width, height, color
            );
        }
        Background::Gradient { .. } => {
            let _ = write!(
                svg,
                r#"<rect width="{}" height="{}" fill="url(#card-bg)"/>"#,
                width, height
            );
        }
    }
    if let Some(uri) = config
        .background_image
        .as_ref()
        .filter(|img| img.is_embedded())
        .and_then(|img| img.src())
    {
        let _ = write!(
            svg,
            r#"<image width="{}" height="{}" preserveAspectRatio="xMidYMid slice" xlink:href="{}"/>"#,
            width,
            height,
            encode_double_quoted_attribute(uri)
        );
    }
    svg.push_str("</g>");

    if let Some(border) = &style.border {
        let half = border.width as f32 / 2.0;
        let _ = write!(
            svg,
            r#"<rect x="{h}" y="{h}" width="{w}" height="{ht}" rx="8" fill="none" stroke="{c}" stroke-width="{sw}"/>"#,
            h = half,
            w = width as f32 - border.width as f32,
            ht = height as f32 - border.width as f32,
            c = border.color,
            sw = border.width
        );
    }

    // avatar
    let (avatar_x, avatar_y, text_x, text_y) = match style.direction {
        ContentDirection::Row => (
            PADDING,
            top + (identity_height - AVATAR) / 2,
            PADDING + AVATAR + GAP,
            top + (identity_height - text_height) / 2,
        ),
        ContentDirection::Column => (PADDING, top, PADDING, top + AVATAR + GAP),
    };
    let radius = AVATAR / 2;
    let (cx, cy) = (avatar_x + radius, avatar_y + radius);
    match config.image.src().filter(|_| config.image.is_embedded()) {
        Some(uri) => {
            let _ = write!(
                svg,
                r#"<clipPath id="avatar-clip"><circle cx="{cx}" cy="{cy}" r="{r}"/></clipPath><image x="{x}" y="{y}" width="{d}" height="{d}" preserveAspectRatio="xMidYMid slice" clip-path="url(#avatar-clip)" xlink:href="{href}"/>"#,
                cx = cx,
                cy = cy,
                r = radius,
                x = avatar_x,
                y = avatar_y,
                d = AVATAR,
                href = encode_double_quoted_attribute(uri)
            );
        }
        None => {
            let _ = write!(
                svg,
                r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{c}" fill-opacity="0.15"/><circle cx="{cx}" cy="{hy}" r="{hr}" fill="{c}" fill-opacity="0.6"/><path d="M {l} {by} Q {l} {my}, {cx} {my} Q {rt} {my}, {rt} {by}" fill="{c}" fill-opacity="0.6"/>"#,
                cx = cx,
                cy = cy,
                r = radius,
                c = text_color,
                hy = avatar_y + AVATAR * 35 / 100,
                hr = AVATAR / 5,
                l = avatar_x + AVATAR / 5,
                rt = avatar_x + AVATAR * 4 / 5,
                my = avatar_y + AVATAR * 55 / 100,
                by = avatar_y + AVATAR * 80 / 100
            );
        }
    }

    let mut baseline = text_y;
    for field in IdentityField::ALL {
        let (size, line_height, bold) = line_metrics(field);
        baseline += line_height;
        let _ = write!(
            svg,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
            text_x,
            baseline - (line_height - size) / 2 - 4,
            font,
            size,
            if bold { 700 } else { 400 },
            text_color,
            encode_text(config.identity(field))
        );
    }

    if !chips.is_empty() {
        let rule_y = top + identity_height + SOCIAL_MARGIN;
        let _ = write!(
            svg,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="0.2"/>"#,
            PADDING,
            rule_y,
            width - PADDING,
            rule_y,
            text_color
        );
        let chips_top = rule_y + SOCIAL_MARGIN;
        for chip in &chips {
            let x = PADDING + chip.x;
            let y = chips_top + chip.y;
            let _ = write!(
                svg,
                r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="4" fill="none" stroke="{c}"/><text x="{tx}" y="{ty}" font-family="{f}" font-size="13" fill="{c}">{label}</text>"#,
                x = x,
                y = y,
                w = chip.width,
                h = CHIP_HEIGHT,
                c = text_color,
                tx = x + 8,
                ty = y + 19,
                f = font,
                label = encode_text(&chip.label)
            );
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Rasterize an SVG scene to PNG bytes at `scale`
pub fn rasterize_png(svg: &str, scale: f32) -> CardResult<Vec<u8>> {
    if !(scale > 0.0 && scale <= MAX_SCALE) {
        return Err(CardError::Export(format!(
            "scale must be in (0, {}], got {}",
            MAX_SCALE, scale
        )));
    }

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree =
        usvg::Tree::from_str(svg, &options).map_err(|e| CardError::Export(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| CardError::Export(format!("cannot allocate {}x{} pixmap", width, height)))?;

    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let pixels = unpremultiply_alpha(pixmap.data());
    let image = RgbaImage::from_raw(width, height, pixels)
        .ok_or_else(|| CardError::Export("pixel buffer size mismatch".to_string()))?;

    let mut buffer = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| CardError::Export(e.to_string()))?;

    debug!(width, height, bytes = buffer.len(), "rasterized card");
    Ok(buffer)
}

/// Render a configuration in the requested format
pub fn export(config: &CardConfiguration, format: ExportFormat, scale: f32) -> CardResult<Vec<u8>> {
    let svg = render_svg(config);
    match format {
        ExportFormat::Svg => Ok(svg.into_bytes()),
        ExportFormat::Png => rasterize_png(&svg, scale),
    }
}

/// tiny-skia pixmaps are premultiplied; PNG expects straight alpha
fn unpremultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());
    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            let r = (chunk[0] as f32 / a).min(255.0) as u8;
            let g = (chunk[1] as f32 / a).min(255.0) as u8;
            let b = (chunk[2] as f32 / a).min(255.0) as u8;
            result.extend_from_slice(&[r, g, b, chunk[3]]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::apply_theme;
    use crate::types::{CardImage, FieldUpdate, Orientation, SocialPlatform, Theme};
    use image::GenericImageView;

    fn svg_size(svg: &str) -> (u32, u32) {
        let attr = |name: &str| -> u32 {
            let start = svg.find(&format!("{}=\"", name)).unwrap() + name.len() + 2;
            let end = start + svg[start..].find('"').unwrap();
            svg[start..end].parse().unwrap()
        };
        (attr("width"), attr("height"))
    }

    #[test]
    fn landscape_scene_is_450_by_270() {
        let svg = render_svg(&CardConfiguration::default());
        assert_eq!(svg_size(&svg), (450, 270));
    }

    #[test]
    fn portrait_scene_is_270_by_450() {
        let config = CardConfiguration::default()
            .with_update(FieldUpdate::Orientation(Orientation::Portrait))
            .unwrap();
        assert_eq!(svg_size(&render_svg(&config)), (270, 450));
    }

    #[test]
    fn social_scene_grows_with_content() {
        let mut config = CardConfiguration::default()
            .with_update(FieldUpdate::ShowSocial(true))
            .unwrap();
        for platform in SocialPlatform::ALL {
            config = config
                .with_update(FieldUpdate::SocialUsername(platform, "someone_long_name".into()))
                .unwrap();
        }
        let svg = render_svg(&config);
        let (w, h) = svg_size(&svg);
        assert_eq!(w, 450);
        assert!(h > 144, "height {h} should cover identity block plus chips");
        assert!(svg.contains("github: someone_long_name"));
    }

    #[test]
    fn text_is_escaped() {
        let config = CardConfiguration::default()
            .with_update(FieldUpdate::Identity(IdentityField::Company, "A & B <Ltd>".into()))
            .unwrap();
        let svg = render_svg(&config);
        assert!(svg.contains("A &amp; B &lt;Ltd&gt;"));
    }

    #[test]
    fn remote_background_not_embedded() {
        let svg = render_svg(&CardConfiguration::default());
        assert!(!svg.contains("giphy"));
    }

    #[test]
    fn gradient_theme_defines_gradient() {
        let config = apply_theme(&CardConfiguration::default(), Theme::Trendy);
        let svg = render_svg(&config);
        assert!(svg.contains(r#"<linearGradient id="card-bg" x1="0" y1="0" x2="1" y2="0">"#));
        assert!(svg.contains("#818cf8"));
    }

    #[test]
    fn embedded_avatar_is_clipped() {
        let config = CardConfiguration::default()
            .with_update(FieldUpdate::Image(CardImage::from_data_uri(
                "data:image/png;base64,iVBORw0KGgo=".into(),
            )))
            .unwrap();
        let svg = render_svg(&config);
        assert!(svg.contains(r#"clip-path="url(#avatar-clip)""#));
    }

    #[test]
    fn png_matches_geometry_and_scale() {
        let png = export(&CardConfiguration::default(), ExportFormat::Png, 2.0).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.dimensions(), (900, 540));
    }

    #[test]
    fn invalid_scale_rejected() {
        let svg = render_svg(&CardConfiguration::default());
        assert!(rasterize_png(&svg, 0.0).is_err());
        assert!(rasterize_png(&svg, 100.0).is_err());
    }

    #[test]
    fn format_parse() {
        assert_eq!("PNG".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
        assert_eq!("svg".parse::<ExportFormat>().unwrap(), ExportFormat::Svg);
        assert!("gif".parse::<ExportFormat>().is_err());
    }
}

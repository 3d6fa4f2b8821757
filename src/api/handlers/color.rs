// src/api/handlers/color.rs
use actix_web::{web, HttpResponse, Responder};
use rand_core::OsRng;

use crate::api::types::{
    ColorConvertRequest, ColorFormat, ColorPreset, ColorPresetsResponse, ColorResponse,
};
use crate::color::{self, parse_components};
use crate::models::ColorValue;

fn parse_color(format: ColorFormat, value: &str) -> color::Result<ColorValue> {
    match format {
        ColorFormat::Hex => ColorValue::from_hex(value),
        ColorFormat::Rgb => {
            let v = parse_components(value, 3)?;
            Ok(ColorValue::from_rgb_values(v[0], v[1], v[2]))
        }
        ColorFormat::Hsl => {
            let v = parse_components(value, 3)?;
            Ok(ColorValue::from_hsl(v[0], v[1], v[2]))
        }
        ColorFormat::Hsv => {
            let v = parse_components(value, 3)?;
            Ok(ColorValue::from_hsv(v[0], v[1], v[2]))
        }
        ColorFormat::Cmyk => {
            let v = parse_components(value, 4)?;
            Ok(ColorValue::from_cmyk(v[0], v[1], v[2], v[3]))
        }
    }
}

fn color_response(color: ColorValue) -> ColorResponse {
    ColorResponse {
        success: true,
        css_rgb: Some(color.css_rgb()),
        css_hsl: Some(color.css_hsl()),
        color: Some(color),
        error: None,
    }
}

/// Convert a color
///
/// Accepts any supported representation and returns all of them.
#[utoipa::path(
    post,
    path = "/api/color/convert",
    tag = "Color",
    request_body = ColorConvertRequest,
    responses(
        (status = 200, description = "Converted color", body = ColorResponse),
        (status = 400, description = "Malformed color value", body = ColorResponse)
    )
)]
pub async fn convert_color(req: web::Json<ColorConvertRequest>) -> impl Responder {
    match parse_color(req.format, &req.value) {
        Ok(color) => HttpResponse::Ok().json(color_response(color)),
        Err(e) => {
            log::warn!("Color conversion failed: {}", e);
            HttpResponse::BadRequest().json(ColorResponse {
                success: false,
                color: None,
                css_rgb: None,
                css_hsl: None,
                error: Some(e.to_string()),
            })
        }
    }
}

/// List preset colors
#[utoipa::path(
    get,
    path = "/api/color/presets",
    tag = "Color",
    responses(
        (status = 200, description = "Preset palette", body = ColorPresetsResponse)
    )
)]
pub async fn list_presets() -> impl Responder {
    let presets = color::presets()
        .into_iter()
        .map(|(name, color)| ColorPreset {
            name: name.to_string(),
            color,
        })
        .collect();

    HttpResponse::Ok().json(ColorPresetsResponse {
        success: true,
        presets,
        error: None,
    })
}

/// Pick a random color
#[utoipa::path(
    get,
    path = "/api/color/random",
    tag = "Color",
    responses(
        (status = 200, description = "Random color", body = ColorResponse)
    )
)]
pub async fn random_color() -> impl Responder {
    HttpResponse::Ok().json(color_response(ColorValue::random(&mut OsRng)))
}

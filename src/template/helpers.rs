// ABOUTME: Handlebars helper functions available inside cloud-init templates
// ABOUTME: Implements base64 encoding for write_files, case conversion, defaults, env lookup, ids and timestamps

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use handlebars::{Context, Handlebars, Helper, Output, RenderContext, RenderError};
use std::env;
use uuid::Uuid;

type HelperResult = std::result::Result<(), RenderError>;

fn str_param<'a>(h: &'a Helper, index: usize, message: &str) -> Result<&'a str, RenderError> {
    h.param(index)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new(message))
}

/// Timestamp helper - formats current UTC time with optional format string
pub fn timestamp_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let format = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .unwrap_or("%Y-%m-%d %H:%M:%S");

    out.write(&Utc::now().format(format).to_string())?;
    Ok(())
}

/// UUID helper - generates a new UUID v4, e.g. for a NoCloud instance-id
pub fn uuid_helper(
    _h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&Uuid::new_v4().to_string())?;
    Ok(())
}

/// Environment variable helper - gets environment variable value
pub fn env_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let var_name = str_param(h, 0, "env helper requires variable name parameter")?;
    let default_value = h.param(1).and_then(|v| v.value().as_str()).unwrap_or("");

    let value = env::var(var_name).unwrap_or_else(|_| default_value.to_string());
    out.write(&value)?;
    Ok(())
}

pub fn base64_encode_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = str_param(h, 0, "base64_encode helper requires input parameter")?;

    out.write(&BASE64.encode(input.as_bytes()))?;
    Ok(())
}

pub fn base64_decode_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = str_param(h, 0, "base64_decode helper requires input parameter")?;

    let decoded_bytes = BASE64
        .decode(input)
        .map_err(|e| RenderError::new(format!("Base64 decode error: {}", e)))?;

    let decoded_str = String::from_utf8(decoded_bytes)
        .map_err(|e| RenderError::new(format!("UTF-8 decode error: {}", e)))?;

    out.write(&decoded_str)?;
    Ok(())
}

pub fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = str_param(h, 0, "upper helper requires input parameter")?;

    out.write(&input.to_uppercase())?;
    Ok(())
}

pub fn lower_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = str_param(h, 0, "lower helper requires input parameter")?;

    out.write(&input.to_lowercase())?;
    Ok(())
}

/// Default helper - provides default value if the first value is empty
pub fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    let default_value = str_param(h, 1, "default helper requires default value parameter")?;

    out.write(if value.is_empty() { default_value } else { value })?;
    Ok(())
}

/// Register all built-in helpers with a Handlebars instance
pub fn register_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("timestamp", Box::new(timestamp_helper));
    handlebars.register_helper("uuid", Box::new(uuid_helper));
    handlebars.register_helper("env", Box::new(env_helper));
    handlebars.register_helper("base64_encode", Box::new(base64_encode_helper));
    handlebars.register_helper("base64_decode", Box::new(base64_decode_helper));
    handlebars.register_helper("upper", Box::new(upper_helper));
    handlebars.register_helper("lower", Box::new(lower_helper));
    handlebars.register_helper("default", Box::new(default_helper));
}

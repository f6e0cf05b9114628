//! Handler for `GET /qr` - the channel pairing page.

use actix_web::{web, HttpResponse};
use qrcode::render::svg;
use qrcode::QrCode;

use super::AppState;

/// Render the pairing page for the messaging channel.
///
/// Shows one of: a connected notice, the pairing QR code to scan, a
/// waiting notice while the gateway has no pairing code yet, or an
/// unavailable notice when the channel was never initialized. Failures
/// while fetching state or rendering the QR produce an HTML 500 page.
pub async fn qr_page(state: web::Data<AppState>) -> HttpResponse {
    let messaging = match &state.messaging {
        Some(messaging) => messaging,
        None => {
            return html_page(
                "Channel unavailable",
                "<p>The messaging channel is not initialized. \
                 Check the channel configuration and restart the service.</p>",
            );
        }
    };

    let pairing = match messaging.pairing_state().await {
        Ok(pairing) => pairing,
        Err(error) => {
            log::error!("Failed to fetch pairing state: {}", error);
            return error_page("Could not reach the messaging channel.");
        }
    };

    if pairing.connected {
        return html_page(
            "Channel connected",
            "<p>The messaging channel is paired and connected. \
             Verification codes are being delivered.</p>",
        );
    }

    match pairing.pairing_code {
        Some(code) => match render_qr_svg(&code) {
            Ok(svg) => html_page(
                "Scan to pair",
                &format!(
                    "<p>Scan this QR code from the messaging app to pair the channel.</p>{}",
                    svg
                ),
            ),
            Err(error) => {
                log::error!("Failed to render pairing QR code: {}", error);
                error_page("Could not render the pairing code.")
            }
        },
        None => html_page(
            "Waiting for pairing",
            "<p>The channel is not connected and no pairing code is \
             available yet. Reload this page in a few seconds.</p>",
        ),
    }
}

/// Render a pairing payload as an SVG QR code
fn render_qr_svg(payload: &str) -> Result<String, qrcode::types::QrError> {
    let code = QrCode::new(payload.as_bytes())?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(240, 240)
        .build())
}

fn html_page(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page(title, body))
}

fn error_page(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .body(page("Something went wrong", &format!("<p>{}</p>", message)))
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = title,
        body = body
    )
}

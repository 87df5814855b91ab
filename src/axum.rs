//! Axum integration for [`RenderTask`].

use axum_core::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use crate::{RenderTask, TemplateEngine};


impl<E: TemplateEngine> IntoResponse for RenderTask<'_, E> {
    fn into_response(self) -> Response {
        let mut buffered = http::Response::new(Vec::new());
        match self.render(&mut buffered) {
            Ok(()) => buffered.map(Body::from),
            Err(err) => {
                let body = format!("Failed to render template: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

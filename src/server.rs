use crate::pipeline::{Pipeline, Prediction};
use axum::extract::{Multipart, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Thin HTTP boundary: routes requests into the pipeline and renders the
/// outcome. Rejections happen here before the pipeline is invoked; every
/// pipeline failure renders as its plain-text message.
pub fn router(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/input", get(input))
        .route("/output", post(output).get(invalid_method))
        .with_state(pipeline)
}

pub async fn serve(
    listen_addr: &str,
    pipeline: Arc<Pipeline>,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    axum::serve(listener, router(pipeline)).await?;
    Ok(())
}

async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

async fn input() -> Html<&'static str> {
    Html(INPUT_PAGE)
}

async fn invalid_method() -> &'static str {
    "Invalid request method"
}

async fn output(State(pipeline): State<Arc<Pipeline>>, mut multipart: Multipart) -> Response {
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            if let Ok(bytes) = field.bytes().await {
                file_bytes = Some(bytes.to_vec());
            }
            break;
        }
    }

    let Some(bytes) = file_bytes else {
        return "No image uploaded".into_response();
    };

    match pipeline.predict(&bytes) {
        Ok(prediction) => Html(render_output(&prediction)).into_response(),
        Err(e) => e.to_string().into_response(),
    }
}

fn render_output(prediction: &Prediction) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Pill Scan — Result</title></head>\n<body>\n\
         <h1>{medicine_name}</h1>\n\
         <p><b>Predicted class:</b> {predicted_class}</p>\n\
         <p><b>Drug class:</b> {drug_class}</p>\n\
         <p><b>Primary use:</b> {primary_use}</p>\n\
         <p><b>Description:</b> {description}</p>\n\
         <p><a href=\"/input\">Classify another pill</a></p>\n\
         </body>\n</html>\n",
        medicine_name = prediction.medicine_name,
        predicted_class = prediction.predicted_class,
        drug_class = prediction.drug_class,
        primary_use = prediction.primary_use,
        description = prediction.description,
    )
}

const HOME_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>Pill Scan</title></head>\n<body>\n\
<h1>Pill Scan</h1>\n\
<p>Upload a photo of a pill to identify it and look up its description.</p>\n\
<p><a href=\"/input\">Get started</a></p>\n\
</body>\n</html>\n";

const INPUT_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><title>Pill Scan — Upload</title></head>\n<body>\n\
<h1>Upload a pill image</h1>\n\
<form action=\"/output\" method=\"post\" enctype=\"multipart/form-data\">\n\
<input type=\"file\" name=\"file\" accept=\"image/*\" required>\n\
<button type=\"submit\">Classify</button>\n\
</form>\n\
</body>\n</html>\n";

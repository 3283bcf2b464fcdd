use crate::errors::AppError;
use crate::models::{
    Category, GoalRequest, HistoryEntry, HistoryResponse, MotivationQuery, MotivationResponse,
    SubmissionResponse,
};
use crate::state::AppState;
use crate::ui::{FormValues, render_index};
use axum::{
    Form, Json,
    extract::{Query, State},
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{COOKIE, SET_COOKIE},
    },
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{debug, info};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "goal_session";

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let mut sessions = state.sessions.lock().await;
    let tracker = sessions.peek(session_id(&headers));
    Html(render_index(tracker, &FormValues::default(), None))
}

pub async fn submit_goal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<GoalRequest>,
) -> Result<Response, AppError> {
    let category = form.category();
    let mut sessions = state.sessions.lock().await;
    let (id, tracker) = sessions.checkout(session_id(&headers));

    let outcome = tracker
        .submit(&state.content, &category, &form.goal)
        .map(|submission| submission.progress);

    match outcome {
        Ok(progress) => {
            info!(session = %id, category = category.key(), progress, "goal recorded");
            with_session(id, &headers, Redirect::to("/"))
        }
        Err(err) => {
            debug!(session = %id, "rejected goal: {err}");
            let values = FormValues {
                category: form.category.trim(),
                custom_category: form.custom_category.as_deref().unwrap_or_default(),
                goal: &form.goal,
            };
            let page = render_index(Some(&*tracker), &values, Some(&err.to_string()));
            with_session(id, &headers, (StatusCode::BAD_REQUEST, Html(page)))
        }
    }
}

pub async fn end_session(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(id) = session_id(&headers) {
        state.sessions.lock().await.end(id);
    }

    let expired = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    let mut response = Redirect::to("/").into_response();
    if let Ok(value) = HeaderValue::from_str(&expired) {
        response.headers_mut().insert(SET_COOKIE, value);
    }
    response
}

pub async fn api_submit_goal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GoalRequest>,
) -> Result<Response, AppError> {
    let category = payload.category();
    let mut sessions = state.sessions.lock().await;
    let (id, tracker) = sessions.checkout(session_id(&headers));

    let response = tracker
        .submit(&state.content, &category, &payload.goal)
        .map(SubmissionResponse::from)?;

    info!(
        session = %id,
        category = category.key(),
        progress = response.progress,
        "goal recorded"
    );
    with_session(id, &headers, Json(response))
}

pub async fn api_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<HistoryResponse> {
    let mut sessions = state.sessions.lock().await;
    let response = match sessions.peek(session_id(&headers)) {
        Some(tracker) => HistoryResponse {
            progress: tracker.progress(),
            goals: tracker.history().map(HistoryEntry::from).collect(),
        },
        None => HistoryResponse {
            progress: 0,
            goals: Vec::new(),
        },
    };
    Json(response)
}

pub async fn api_motivation(
    State(state): State<AppState>,
    Query(query): Query<MotivationQuery>,
) -> Json<MotivationResponse> {
    let category = Category::from_form(&query.category, None);
    let (tip, quote, image) = state
        .sessions
        .lock()
        .await
        .preview(&state.content, &category);

    Json(MotivationResponse {
        category: category.label(),
        tip,
        quote,
        image,
    })
}

/// Session id from the request cookie, if it parses.
fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Attaches the session cookie when the client does not already carry `id`.
fn with_session(
    id: Uuid,
    headers: &HeaderMap,
    body: impl IntoResponse,
) -> Result<Response, AppError> {
    let mut response = body.into_response();
    if session_id(headers) != Some(id) {
        let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
        let value = HeaderValue::from_str(&cookie).map_err(AppError::internal)?;
        response.headers_mut().insert(SET_COOKIE, value);
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn reads_session_cookie_among_others() {
        let id = Uuid::new_v4();
        let headers = headers_with(&format!("theme=dark; {SESSION_COOKIE}={id}; lang=en"));
        assert_eq!(session_id(&headers), Some(id));
    }

    #[test]
    fn ignores_garbage_session_cookie() {
        assert_eq!(session_id(&headers_with("goal_session=nope")), None);
        assert_eq!(session_id(&HeaderMap::new()), None);
    }

    #[test]
    fn sets_cookie_only_for_new_sessions() {
        let id = Uuid::new_v4();
        let fresh = with_session(id, &HeaderMap::new(), "ok").unwrap();
        let cookie = fresh.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with(&format!("{SESSION_COOKIE}={id};")));

        let known = headers_with(&format!("{SESSION_COOKIE}={id}"));
        let repeat = with_session(id, &known, "ok").unwrap();
        assert!(repeat.headers().get(SET_COOKIE).is_none());
    }
}

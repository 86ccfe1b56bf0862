use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::error::Error;
use crate::server::AppState;
use crate::server::dto::{
    CafeResponse, CafesResponse, DeleteCafeParams, NewCafeForm, SearchParams, UpdatePriceParams,
};
use crate::server::response::{ActionResponse, ApiError, StoreOptionExt, StoreResultExt};
use crate::server::validation::{form_flag, require_field};
use crate::types::NewCafe;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn random_cafe(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let cafe = state
        .store
        .random_cafe()
        .api_err("Failed to pick a cafe")?
        .or_not_found("Sorry, the database has no cafes yet.")?;

    Ok::<_, ApiError>(Json(CafeResponse { cafe }))
}

pub async fn all_cafes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let cafes = state.store.list_cafes().api_err("Failed to list cafes")?;

    Ok::<_, ApiError>(Json(CafesResponse { cafes }))
}

pub async fn search_cafes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    // A missing `loc` matches nothing and takes the not-found path
    let loc = params.loc.unwrap_or_default();

    let cafes = state
        .store
        .find_cafes_by_location(&loc)
        .api_err("Failed to search cafes")?;

    if cafes.is_empty() {
        return Err(ApiError::not_found(
            "Sorry, we could not find a cafe in that location.",
        ));
    }

    Ok::<_, ApiError>(Json(CafesResponse { cafes }))
}

pub async fn add_cafe(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewCafeForm>,
) -> impl IntoResponse {
    let cafe = NewCafe {
        name: require_field(form.name, "name")?,
        map_url: require_field(form.map_url, "map_url")?,
        img_url: require_field(form.img_url, "img_url")?,
        location: require_field(form.loc, "loc")?,
        seats: require_field(form.seats, "seats")?,
        has_toilet: form_flag(form.has_toilet.as_ref()),
        has_wifi: form_flag(form.has_wifi.as_ref()),
        has_sockets: form_flag(form.has_sockets.as_ref()),
        can_take_calls: form_flag(form.calls.as_ref()),
        coffee_price: form.coffee_price.filter(|p| !p.is_empty()),
    };

    match state.store.create_cafe(&cafe) {
        Ok(_) => Ok(Json(ActionResponse::success(
            "Successfully added the new cafe.",
        ))),
        Err(Error::Conflict(_)) => Err(ApiError::conflict(format!(
            "Sorry, a cafe named '{}' is already in the database.",
            cafe.name
        ))),
        Err(_) => Err(ApiError::internal("Failed to add the cafe")),
    }
}

pub async fn update_price(
    State(state): State<Arc<AppState>>,
    Path(cafe_id): Path<i64>,
    Query(params): Query<UpdatePriceParams>,
) -> impl IntoResponse {
    match state
        .store
        .update_coffee_price(cafe_id, params.new_price.as_deref())
    {
        Ok(()) => Ok(Json(ActionResponse::success(
            "Successfully updated the price.",
        ))),
        // 400 rather than 404 for an unknown id is a compatibility contract
        Err(Error::NotFound) => Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "Not Found",
            format!("Sorry, no cafe with id={cafe_id} was found in the database."),
        )),
        Err(_) => Err(ApiError::internal("Failed to update the price")),
    }
}

pub async fn report_closed(
    State(state): State<Arc<AppState>>,
    Path(cafe_id): Path<i64>,
    Query(params): Query<DeleteCafeParams>,
) -> impl IntoResponse {
    // The key is checked before the id is even looked up, so a wrong key
    // never reveals whether the cafe exists
    if params.api_key.as_deref() != Some(state.api_key.as_str()) {
        return Err(ApiError::forbidden(
            "Sorry, you are not allowed to perform this operation. \
             Make sure you have the correct api_key.",
        ));
    }

    let deleted = state
        .store
        .delete_cafe(cafe_id)
        .api_err("Failed to delete the cafe")?;

    if !deleted {
        return Err(ApiError::not_found(format!(
            "Sorry, no cafe with id={cafe_id} was found in the database."
        )));
    }

    Ok::<_, ApiError>(Json(ActionResponse::success(
        "Successfully deleted the cafe.",
    )))
}

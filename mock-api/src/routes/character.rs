use actix_web::{HttpResponse, get, web};
use anyhow::{Context, anyhow};
use client::CharacterId;

use crate::characters;

use super::APIError;

/// Characters for a comma-separated id list. Like the public api, a single
/// id answers with a bare object and unknown ids in a list are skipped.
#[tracing::instrument(ret)]
#[get("/character/{ids}")]
pub async fn get_characters(
    ids: web::Path<String>,
) -> Result<HttpResponse, APIError> {
    let ids = parse_ids(&ids)?;

    if let [id] = ids.as_slice() {
        let character = characters::character(*id).ok_or_else(|| {
            APIError::NotFound(anyhow!("Character {id} does not exist"))
        })?;
        return Ok(HttpResponse::Ok().json(character));
    }

    let found: Vec<_> =
        ids.into_iter().filter_map(characters::character).collect();
    Ok(HttpResponse::Ok().json(found))
}

fn parse_ids(raw: &str) -> Result<Vec<CharacterId>, APIError> {
    raw.split(',')
        .map(|token| {
            token
                .trim()
                .parse()
                .map(CharacterId)
                .with_context(|| format!("Invalid character id {token:?}"))
                .map_err(APIError::BadRequest)
        })
        .collect()
}

//! Sheet API client over any [`HttpClient`].
//!
//! Two endpoints are used:
//! - `GET {base}/sheets/{id}/columns?includeAll=true&include=filters`
//! - `POST {base}/sheets/{id}/rows` with `[{"toBottom": true, "cells": [..]}]`

use qrs_core::{CellAssignment, Column, ColumnId, ColumnSchema, SheetId};
use qrs_transport::{HttpClient, HttpRequest, TransportAdapter};
use serde::{Deserialize, Serialize};

use crate::error::SheetsError;
use crate::http::check_status;

/// Every optional column attribute the list call can include.
const COLUMN_INCLUSIONS: &[&str] = &["filters"];

#[derive(Deserialize)]
struct ColumnPage {
    #[serde(default)]
    data: Vec<RemoteColumn>,
}

#[derive(Deserialize)]
struct RemoteColumn {
    id: ColumnId,
    #[serde(default)]
    title: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewRow<'a> {
    to_bottom: bool,
    cells: &'a [CellAssignment],
}

/// Authenticated client for the two sheet endpoints used by the save
/// pipeline. Generic over the transport so tests can script responses.
pub struct SheetsClient<H = TransportAdapter> {
    http: H,
    base_url: String,
    token: String,
}

impl<H: HttpClient> SheetsClient<H> {
    #[must_use]
    pub fn new(http: H, base_url: &str, token: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// The underlying transport.
    pub const fn http(&self) -> &H {
        &self.http
    }

    fn sheet_url(&self, sheet: &SheetId, tail: &str) -> String {
        format!(
            "{}/sheets/{}/{tail}",
            self.base_url,
            urlencoding::encode(sheet.as_str())
        )
    }

    fn authorized(&self, request: HttpRequest) -> HttpRequest {
        request
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", qrs_transport::JSON_CONTENT_TYPE)
    }

    /// Fetch every column of `sheet`, with all optional attributes included.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn list_columns(&mut self, sheet: &SheetId) -> Result<ColumnSchema, SheetsError> {
        let url = format!(
            "{}?includeAll=true&include={}",
            self.sheet_url(sheet, "columns"),
            COLUMN_INCLUSIONS.join(",")
        );
        let request = self.authorized(HttpRequest::get(url));
        let response = self.http.execute(request).await?;
        check_status(&mut self.http, response).await?;

        let body = self.http.read_body().await?;
        let page: ColumnPage =
            serde_json::from_slice(&body).map_err(|e| SheetsError::Parse(e.to_string()))?;
        Ok(page
            .data
            .into_iter()
            .map(|c| Column {
                id: c.id,
                title: c.title,
            })
            .collect())
    }

    /// Append one row holding `cells` to the bottom of `sheet`.
    ///
    /// Only the status is checked; the response body is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] if the request fails or the API returns a
    /// non-success status.
    pub async fn append_row(
        &mut self,
        sheet: &SheetId,
        cells: &[CellAssignment],
    ) -> Result<(), SheetsError> {
        let rows = [NewRow {
            to_bottom: true,
            cells,
        }];
        let body = serde_json::to_vec(&rows).map_err(|e| SheetsError::Encode(e.to_string()))?;
        let request = self.authorized(HttpRequest::post(self.sheet_url(sheet, "rows")).json_body(body));
        let response = self.http.execute(request).await?;
        check_status(&mut self.http, response).await?;
        self.http.finish_exchange();
        Ok(())
    }

    /// Close any open exchange and return pooled connections.
    pub fn release(&mut self) {
        self.http.release();
    }
}

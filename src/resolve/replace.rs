// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::Resolver;
use crate::format::scan::scan_references;
use crate::model::ResolvedEntity;
use crate::store::LookupContext;

/// Replaces every resolvable reference in `text` with `formatter(entity)`.
///
/// Returns the rewritten text and one entity per replaced occurrence, in encounter
/// order. References that fail to resolve stay in the text verbatim. Each distinct
/// token is resolved at most once per call.
pub fn expand<F>(
    ctx: &LookupContext,
    resolver: &Resolver<'_>,
    text: &str,
    mut formatter: F,
) -> (String, Vec<ResolvedEntity>)
where
    F: FnMut(&ResolvedEntity) -> String,
{
    let matches = scan_references(text);
    if matches.is_empty() {
        return (text.to_owned(), Vec::new());
    }

    let mut resolved = HashMap::<&str, Option<ResolvedEntity>>::new();
    let mut out = String::with_capacity(text.len());
    let mut entities = Vec::<ResolvedEntity>::with_capacity(matches.len());
    let mut cursor = 0usize;

    for m in &matches {
        let entry = resolved.entry(m.token).or_insert_with(|| {
            resolver
                .resolve(ctx, m.token)
                .map_err(|err| debug!(token = m.token, %err, "leaving reference unresolved"))
                .ok()
        });
        let Some(entity) = entry else {
            continue;
        };

        out.push_str(&text[cursor..m.span.start]);
        out.push_str(&formatter(entity));
        cursor = m.span.end;
        entities.push(entity.clone());
    }
    out.push_str(&text[cursor..]);

    trace!(references = matches.len(), replaced = entities.len(), "expanded references");
    (out, entities)
}

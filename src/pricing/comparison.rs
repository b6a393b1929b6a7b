//! Join, filter and rank vendor offers for a material query.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::store::{PriceQuote, Vendor, VendorMaterial};

/// Rank every offer whose material name contains `fragment`.
///
/// Offers whose vendor no longer exists are dropped (inner join). The sort is
/// stable, so callers should pass materials in storage order.
pub fn rank_offers<'a, V, M>(vendors: V, materials: M, fragment: &str) -> Vec<PriceQuote>
where
    V: IntoIterator<Item = &'a Vendor>,
    M: IntoIterator<Item = &'a VendorMaterial>,
{
    let vendors: HashMap<i64, &Vendor> = vendors.into_iter().map(|v| (v.id, v)).collect();

    let mut quotes: Vec<PriceQuote> = materials
        .into_iter()
        .filter(|m| m.material_name.contains(fragment))
        .filter_map(|m| {
            let vendor = vendors.get(&m.vendor_id)?;
            Some(PriceQuote {
                material: VendorMaterial {
                    vendor_name: Some(vendor.name.clone()),
                    ..m.clone()
                },
                vendor_rating: vendor.rating,
            })
        })
        .collect();

    quotes.sort_by(|a, b| {
        a.material
            .price
            .partial_cmp(&b.material.price)
            .unwrap_or(Ordering::Equal)
    });
    quotes
}

/// Build a SQL `LIKE` pattern matching `fragment` anywhere, with the
/// wildcard characters in the fragment escaped.
pub fn like_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

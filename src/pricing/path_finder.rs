//! Bounded breadth-first path search and multiplier composition.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::confidence::path_confidence;
use super::price_graph::{PriceGraph, PriceGraphEdge};
use super::pricing_errors::PricingError;
use super::pricing_model::{PricePath, PricingConfig};
use crate::assets::Asset;
use crate::errors::Result;

struct Frontier {
    asset_id: i64,
    path: Vec<Arc<PriceGraphEdge>>,
    visited: HashSet<i64>,
}

/// Finds all simple paths from `from` to `to` with at most
/// `config.max_hops` edges, scored and ready for selection.
///
/// Paths whose multiplier is not strictly positive are dropped.
/// Termination is guaranteed: the visited set grows strictly along any
/// branch and hop depth is capped.
pub fn find_price_paths(
    graph: &PriceGraph,
    from: &Asset,
    to: &Asset,
    now: DateTime<Utc>,
    config: &PricingConfig,
) -> Result<Vec<PricePath>> {
    let mut paths = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(Frontier {
        asset_id: from.id,
        path: Vec::new(),
        visited: HashSet::from([from.id]),
    });

    while let Some(Frontier {
        asset_id,
        path,
        visited,
    }) = queue.pop_front()
    {
        if path.len() >= config.max_hops {
            continue;
        }

        for edge in graph.edges_for(asset_id) {
            let Some(other) = edge.pair.other_asset(asset_id) else {
                continue;
            };
            if visited.contains(&other.id) {
                continue;
            }

            let mut new_path = path.clone();
            new_path.push(Arc::clone(edge));

            if other.id == to.id {
                let Some(multiplier) = total_multiplier(&new_path, from)? else {
                    continue;
                };
                let confidence = path_confidence(&new_path, now, config);
                paths.push(PricePath {
                    hops: new_path.len(),
                    multiplier,
                    confidence,
                    edges: new_path,
                });
            } else {
                let mut new_visited = visited.clone();
                new_visited.insert(other.id);
                queue.push_back(Frontier {
                    asset_id: other.id,
                    path: new_path,
                    visited: new_visited,
                });
            }
        }
    }

    Ok(paths)
}

/// Walks a path from `from`, composing the directional conversion rate:
/// multiply by the observed price when crossing base-to-quote, by its
/// reciprocal when crossing quote-to-base.
///
/// Returns `Ok(None)` when the path cannot yield a positive rate (empty
/// path or a non-positive observed price). An edge that does not touch
/// the walker's current asset is corrupted input and fails with
/// [`PricingError::DisconnectedEdge`].
pub fn total_multiplier(edges: &[Arc<PriceGraphEdge>], from: &Asset) -> Result<Option<Decimal>> {
    if edges.is_empty() {
        return Ok(None);
    }

    let mut multiplier = Decimal::ONE;
    let mut current = from;

    for edge in edges {
        let price = edge.observation.price;
        if price <= Decimal::ZERO {
            log::debug!(
                "Non-positive price {} on {}, discarding path",
                price,
                edge.pair.symbol
            );
            return Ok(None);
        }

        if edge.pair.base_asset.id == current.id {
            // base -> quote
            multiplier *= price;
            current = &edge.pair.quote_asset;
        } else if edge.pair.quote_asset.id == current.id {
            // quote -> base
            multiplier *= Decimal::ONE / price;
            current = &edge.pair.base_asset;
        } else {
            return Err(PricingError::DisconnectedEdge {
                pair_symbol: edge.pair.symbol.clone(),
                asset_symbol: current.symbol.clone(),
            }
            .into());
        }
    }

    Ok((multiplier > Decimal::ZERO).then_some(multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairs::TradingPair;
    use crate::prices::PriceHistory;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn assets() -> (Asset, Asset, Asset, Asset, Asset) {
        (
            Asset::new(1, "ETH", "Ethereum"),
            Asset::new(2, "BTC", "Bitcoin"),
            Asset::fiat(3, "USD", "US Dollar"),
            Asset::fiat(4, "EUR", "Euro"),
            Asset::new(5, "SOL", "Solana"),
        )
    }

    fn edge(
        pair_id: i64,
        base: &Asset,
        quote: &Asset,
        price: Decimal,
        now: DateTime<Utc>,
    ) -> (TradingPair, PriceHistory) {
        let pair = TradingPair::new(pair_id, base.clone(), quote.clone());
        let observation = PriceHistory::new(pair_id, pair_id, 1, now - Duration::minutes(5), price);
        (pair, observation)
    }

    fn build_graph(edges: Vec<(TradingPair, PriceHistory)>, now: DateTime<Utc>) -> PriceGraph {
        let (pairs, observations): (Vec<_>, Vec<_>) = edges.into_iter().unzip();
        PriceGraph::build(&pairs, observations, now - Duration::hours(24))
    }

    #[test]
    fn composes_a_two_hop_multiplier() {
        let now = Utc::now();
        let (eth, btc, usd, _, _) = assets();
        let graph = build_graph(
            vec![
                edge(10, &eth, &btc, dec!(0.05), now),
                edge(11, &btc, &usd, dec!(50000), now),
            ],
            now,
        );

        let paths = find_price_paths(&graph, &eth, &usd, now, &PricingConfig::default()).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].hops, 2);
        assert_eq!(paths[0].multiplier, dec!(2500));
        assert!(paths[0].confidence > 0.0 && paths[0].confidence <= 1.0);
    }

    #[test]
    fn inverts_prices_when_walking_quote_to_base() {
        let now = Utc::now();
        let (eth, btc, usd, _, _) = assets();
        // Both pairs are quoted "against" the walk direction:
        // BTC/ETH = 20 and USD/BTC = 0.00002.
        let graph = build_graph(
            vec![
                edge(10, &btc, &eth, dec!(20), now),
                edge(11, &usd, &btc, dec!(0.00002), now),
            ],
            now,
        );

        let paths = find_price_paths(&graph, &eth, &usd, now, &PricingConfig::default()).unwrap();
        assert_eq!(paths.len(), 1);
        // 1 ETH = 1/20 BTC = (1/20) / 0.00002 USD = 2500 USD
        assert_eq!(paths[0].multiplier, dec!(2500));
    }

    #[test]
    fn respects_the_hop_bound() {
        let now = Utc::now();
        let (eth, btc, usd, eur, sol) = assets();
        // Only route from ETH to EUR takes 4 hops.
        let graph = build_graph(
            vec![
                edge(10, &eth, &btc, dec!(0.05), now),
                edge(11, &btc, &sol, dec!(500), now),
                edge(12, &sol, &usd, dec!(100), now),
                edge(13, &usd, &eur, dec!(0.9), now),
            ],
            now,
        );

        let config = PricingConfig::default();
        assert!(find_price_paths(&graph, &eth, &eur, now, &config)
            .unwrap()
            .is_empty());

        let relaxed = PricingConfig {
            max_hops: 4,
            ..config
        };
        let paths = find_price_paths(&graph, &eth, &eur, now, &relaxed).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].hops, 4);
    }

    #[test]
    fn never_revisits_an_asset() {
        let now = Utc::now();
        let (eth, btc, usd, eur, _) = assets();
        // Dense little graph with a cycle ETH-BTC-USD-ETH.
        let graph = build_graph(
            vec![
                edge(10, &eth, &btc, dec!(0.05), now),
                edge(11, &btc, &usd, dec!(50000), now),
                edge(12, &eth, &usd, dec!(2400), now),
                edge(13, &usd, &eur, dec!(0.9), now),
            ],
            now,
        );

        let paths = find_price_paths(&graph, &eth, &eur, now, &PricingConfig::default()).unwrap();
        assert!(!paths.is_empty());
        for path in &paths {
            let mut seen = HashSet::from([eth.id]);
            let mut current = eth.id;
            for edge in &path.edges {
                let other = edge.pair.other_asset(current).unwrap();
                assert!(seen.insert(other.id), "asset {} revisited", other.symbol);
                current = other.id;
            }
            assert_eq!(current, eur.id);
        }
    }

    #[test]
    fn finds_all_alternative_routes() {
        let now = Utc::now();
        let (eth, btc, usd, _, sol) = assets();
        let graph = build_graph(
            vec![
                edge(10, &eth, &btc, dec!(0.05), now),
                edge(11, &btc, &usd, dec!(50000), now),
                edge(12, &eth, &sol, dec!(25), now),
                edge(13, &sol, &usd, dec!(100), now),
                edge(14, &eth, &usd, dec!(2450), now),
            ],
            now,
        );

        let paths = find_price_paths(&graph, &eth, &usd, now, &PricingConfig::default()).unwrap();
        let mut hops: Vec<usize> = paths.iter().map(|p| p.hops).collect();
        hops.sort_unstable();
        assert_eq!(hops, vec![1, 2, 2]);
    }

    #[test]
    fn disconnected_edge_is_a_fatal_error() {
        let now = Utc::now();
        let (eth, _, usd, eur, _) = assets();
        let (pair, observation) = edge(10, &usd, &eur, dec!(0.9), now);
        let walk = vec![Arc::new(PriceGraphEdge { pair, observation })];

        let err = total_multiplier(&walk, &eth).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Pricing(PricingError::DisconnectedEdge { .. })
        ));
    }

    #[test]
    fn empty_path_has_no_multiplier() {
        let (eth, ..) = assets();
        assert!(total_multiplier(&[], &eth).unwrap().is_none());
    }
}

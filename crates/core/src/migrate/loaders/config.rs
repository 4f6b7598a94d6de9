//! Singleton configuration loaders: site, hero, and footer with its links.
//! Each is replaced wholesale; at most one row exists per type.

use crate::entities::{NewFooterConfig, NewFooterLink, NewHeroConfig, NewSiteConfig};
use crate::legacy::{LegacyFooter, LegacyHero, LegacySite};
use crate::store::{ImportStore, StoreError};

pub async fn load_site<S: ImportStore>(
    store: &mut S,
    site: &LegacySite,
) -> Result<u32, StoreError> {
    store
        .replace_site_config(NewSiteConfig::from_legacy(site))
        .await?;
    Ok(1)
}

pub async fn load_hero<S: ImportStore>(
    store: &mut S,
    hero: &LegacyHero,
) -> Result<u32, StoreError> {
    store
        .replace_hero_config(NewHeroConfig::from_legacy(hero))
        .await?;
    Ok(1)
}

pub async fn load_footer<S: ImportStore>(
    store: &mut S,
    footer: &LegacyFooter,
) -> Result<u32, StoreError> {
    let links = footer
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| NewFooterLink::from_legacy(link, i as i32))
        .collect();
    store
        .replace_footer(NewFooterConfig::from_legacy(footer), links)
        .await?;
    Ok(1)
}

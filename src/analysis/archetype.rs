use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChampionTag {
    Tank,
    Support,
    Assassin,
    Marksman,
    Mage,
    Fighter,
}

impl ChampionTag {
    /// Champions that usually fight from behind their frontline.
    pub fn is_backline(&self) -> bool {
        matches!(
            self,
            ChampionTag::Support | ChampionTag::Marksman | ChampionTag::Mage | ChampionTag::Assassin
        )
    }
}

/// Source of archetype tags. The bundled table is an approximation, so the
/// scoring engine takes this as a parameter rather than reading it directly.
pub trait ArchetypeLookup {
    fn tags(&self, champion_name: &str) -> &[ChampionTag];

    fn has_tag(&self, champion_name: &str, tag: ChampionTag) -> bool {
        self.tags(champion_name).contains(&tag)
    }
}

/// Tags bundled with the crate, keyed by the feed's `championName`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticArchetypes;

impl ArchetypeLookup for StaticArchetypes {
    fn tags(&self, champion_name: &str) -> &[ChampionTag] {
        CHAMPION_TAGS
            .get(champion_name)
            .copied()
            .unwrap_or(&[])
    }
}

impl<H: std::hash::BuildHasher> ArchetypeLookup for HashMap<String, Vec<ChampionTag>, H> {
    fn tags(&self, champion_name: &str) -> &[ChampionTag] {
        self.get(champion_name).map(Vec::as_slice).unwrap_or(&[])
    }
}

use ChampionTag::{Assassin as A, Fighter as F, Mage as M, Marksman as K, Support as S, Tank as T};

static CHAMPION_TAGS: Lazy<HashMap<&'static str, &'static [ChampionTag]>> = Lazy::new(|| {
    let table: &[(&str, &'static [ChampionTag])] = &[
        ("Aatrox", &[F, T]),
        ("Ahri", &[M, A]),
        ("Akali", &[A]),
        ("Akshan", &[K, A]),
        ("Alistar", &[T, S]),
        ("Ambessa", &[F, A]),
        ("Amumu", &[T, M]),
        ("Anivia", &[M, S]),
        ("Annie", &[M]),
        ("Aphelios", &[K]),
        ("Ashe", &[K, S]),
        ("AurelionSol", &[M]),
        ("Aurora", &[M, A]),
        ("Azir", &[M, K]),
        ("Bard", &[S, M]),
        ("Belveth", &[F]),
        ("Blitzcrank", &[T, F]),
        ("Brand", &[M]),
        ("Braum", &[S, T]),
        ("Briar", &[F, A]),
        ("Caitlyn", &[K]),
        ("Camille", &[F]),
        ("Cassiopeia", &[M]),
        ("Chogath", &[T, M]),
        ("Corki", &[K]),
        ("Darius", &[F, T]),
        ("Diana", &[F, M]),
        ("Draven", &[K]),
        ("DrMundo", &[F, T]),
        ("Ekko", &[A, F]),
        ("Elise", &[M, F]),
        ("Evelynn", &[A, M]),
        ("Ezreal", &[K, M]),
        ("Fiddlesticks", &[M, S]),
        ("Fiora", &[F, A]),
        ("Fizz", &[A, F]),
        ("Galio", &[T, M]),
        ("Gangplank", &[F]),
        ("Garen", &[F, T]),
        ("Gnar", &[F, T]),
        ("Gragas", &[F, M]),
        ("Graves", &[K]),
        ("Gwen", &[F, A]),
        ("Hecarim", &[F, T]),
        ("Heimerdinger", &[M, S]),
        ("Hwei", &[M, S]),
        ("Illaoi", &[F, T]),
        ("Irelia", &[F, A]),
        ("Ivern", &[S, M]),
        ("Janna", &[S, M]),
        ("JarvanIV", &[T, F]),
        ("Jax", &[F, A]),
        ("Jayce", &[F, K]),
        ("Jhin", &[K, M]),
        ("Jinx", &[K]),
        ("Kaisa", &[K]),
        ("Kalista", &[K]),
        ("Karma", &[M, S]),
        ("Karthus", &[M]),
        ("Kassadin", &[A, M]),
        ("Katarina", &[A, M]),
        ("Kayle", &[F, S]),
        ("Kayn", &[F, A]),
        ("Kennen", &[M]),
        ("Khazix", &[A]),
        ("Kindred", &[K]),
        ("Kled", &[F, T]),
        ("KogMaw", &[K, M]),
        ("KSante", &[T, F]),
        ("Leblanc", &[A, M]),
        ("LeeSin", &[F, A]),
        ("Leona", &[T, S]),
        ("Lillia", &[F, M]),
        ("Lissandra", &[M]),
        ("Lucian", &[K]),
        ("Lulu", &[S, M]),
        ("Lux", &[M, S]),
        ("Malphite", &[T, F]),
        ("Malzahar", &[M, A]),
        ("Maokai", &[T, M]),
        ("MasterYi", &[A, F]),
        ("Mel", &[M, S]),
        ("Milio", &[S, M]),
        ("MissFortune", &[K]),
        ("MonkeyKing", &[F, T]),
        ("Mordekaiser", &[F]),
        ("Morgana", &[M, S]),
        ("Naafiri", &[A, F]),
        ("Nami", &[S, M]),
        ("Nasus", &[F, T]),
        ("Nautilus", &[T, S]),
        ("Neeko", &[M, S]),
        ("Nidalee", &[A, M]),
        ("Nilah", &[F, A]),
        ("Nocturne", &[A, F]),
        ("Nunu", &[T, F]),
        ("Olaf", &[F, T]),
        ("Orianna", &[M, S]),
        ("Ornn", &[T, F]),
        ("Pantheon", &[F, A]),
        ("Poppy", &[T, F]),
        ("Pyke", &[S, A]),
        ("Qiyana", &[A, F]),
        ("Quinn", &[K, A]),
        ("Rakan", &[S]),
        ("Rammus", &[T, F]),
        ("RekSai", &[F]),
        ("Rell", &[T, S]),
        ("Renata", &[S, M]),
        ("Renekton", &[F, T]),
        ("Rengar", &[A, F]),
        ("Riven", &[F, A]),
        ("Rumble", &[F, M]),
        ("Ryze", &[M, F]),
        ("Samira", &[K]),
        ("Sejuani", &[T, F]),
        ("Senna", &[K, S]),
        ("Seraphine", &[M, S]),
        ("Sett", &[F, T]),
        ("Shaco", &[A]),
        ("Shen", &[T]),
        ("Shyvana", &[F, T]),
        ("Singed", &[T, F]),
        ("Sion", &[T, F]),
        ("Sivir", &[K]),
        ("Skarner", &[T, F]),
        ("Smolder", &[K, M]),
        ("Sona", &[S, M]),
        ("Soraka", &[S, M]),
        ("Swain", &[M, F]),
        ("Sylas", &[M, A]),
        ("Syndra", &[M]),
        ("TahmKench", &[T, S]),
        ("Taliyah", &[M]),
        ("Talon", &[A]),
        ("Taric", &[S, F]),
        ("Teemo", &[K, A]),
        ("Thresh", &[S, F]),
        ("Tristana", &[K, A]),
        ("Trundle", &[F, T]),
        ("Tryndamere", &[F, A]),
        ("TwistedFate", &[M]),
        ("Twitch", &[K, A]),
        ("Udyr", &[F, T]),
        ("Urgot", &[F, T]),
        ("Varus", &[K, M]),
        ("Vayne", &[K, A]),
        ("Veigar", &[M]),
        ("Velkoz", &[M]),
        ("Vex", &[M]),
        ("Vi", &[F, A]),
        ("Viego", &[A, F]),
        ("Viktor", &[M]),
        ("Vladimir", &[M]),
        ("Volibear", &[F, T]),
        ("Warwick", &[F, T]),
        ("Xayah", &[K]),
        ("Xerath", &[M]),
        ("XinZhao", &[F, A]),
        ("Yasuo", &[F, A]),
        ("Yone", &[A, F]),
        ("Yorick", &[F, T]),
        ("Yuumi", &[S, M]),
        ("Zac", &[T, F]),
        ("Zed", &[A]),
        ("Zeri", &[K]),
        ("Ziggs", &[M]),
        ("Zilean", &[S, M]),
        ("Zoe", &[M, S]),
        ("Zyra", &[M, S]),
    ];
    table.iter().copied().collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_table_knows_common_champions() {
        let lookup = StaticArchetypes;
        assert!(lookup.has_tag("Leona", ChampionTag::Support));
        assert!(lookup.has_tag("Zed", ChampionTag::Assassin));
        assert!(lookup.tags("NotAChampion").is_empty());
    }

    #[test]
    fn map_lookup_can_replace_static_table() {
        let mut custom = HashMap::new();
        custom.insert("Zed".to_string(), vec![ChampionTag::Support]);
        assert!(custom.has_tag("Zed", ChampionTag::Support));
        assert!(!custom.has_tag("Zed", ChampionTag::Assassin));
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    Zh,
    Ar,
}

impl Language {
    pub const ALL: [Language; 5] = [Language::En, Language::Es, Language::Fr, Language::Zh, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Zh => "zh",
            Language::Ar => "ar",
        }
    }

    /// Accepts `"en"`, `"EN"` and region-tagged codes like `"fr-CA"`.
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code.split(['-', '_']).next()?.to_ascii_lowercase();
        Language::ALL.into_iter().find(|language| language.code() == primary)
    }

    pub fn is_rtl(self) -> bool {
        self == Language::Ar
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    NavHome,
    NavDestinations,
    NavTokenomics,
    NavPartnerships,
    NavHowToBuy,
    ConnectWallet,
    HeroTitle,
    HeroSubtitle,
    LaunchCountdown,
    GalleryTitle,
    GallerySubtitle,
    ViewAllDestinations,
    RoadmapTitle,
    CommunityJoin,
    Subscribe,
    NavAbout,
    NavStaking,
    NavWhitepaper,
    NavDebitCard,
    NavBlog,
    BuyHttc,
    WhitepaperTitle,
    ReadWhitepaper,
}

fn english(key: Key) -> &'static str {
    match key {
        Key::NavHome => "Home",
        Key::NavDestinations => "Destinations",
        Key::NavTokenomics => "Tokenomics",
        Key::NavPartnerships => "Partnerships",
        Key::NavHowToBuy => "How to Buy",
        Key::ConnectWallet => "Connect Wallet",
        Key::HeroTitle => "Travel the world, rewarded",
        Key::HeroSubtitle => "HTTCoin turns every booking into travel rewards.",
        Key::LaunchCountdown => "Launching in",
        Key::GalleryTitle => "HTTCoin Around the World",
        Key::GallerySubtitle => "Discover where your travel rewards take you",
        Key::ViewAllDestinations => "View All Destinations",
        Key::RoadmapTitle => "Roadmap",
        Key::CommunityJoin => "Join the HTTCoin community",
        Key::Subscribe => "Subscribe",
        Key::NavAbout => "About",
        Key::NavStaking => "Staking",
        Key::NavWhitepaper => "Whitepaper",
        Key::NavDebitCard => "Debit Card",
        Key::NavBlog => "Blog",
        Key::BuyHttc => "Buy HTTC",
        Key::WhitepaperTitle => "HTTCoin Whitepaper",
        Key::ReadWhitepaper => "Read the whitepaper",
    }
}

fn spanish(key: Key) -> Option<&'static str> {
    Some(match key {
        Key::NavHome => "Inicio",
        Key::NavDestinations => "Destinos",
        Key::NavTokenomics => "Tokenómica",
        Key::NavPartnerships => "Alianzas",
        Key::NavHowToBuy => "Cómo comprar",
        Key::ConnectWallet => "Conectar billetera",
        Key::HeroTitle => "Viaja por el mundo con recompensas",
        Key::LaunchCountdown => "Lanzamiento en",
        Key::GalleryTitle => "HTTCoin por el mundo",
        Key::ViewAllDestinations => "Ver todos los destinos",
        Key::Subscribe => "Suscribirse",
        Key::NavAbout => "Nosotros",
        Key::NavBlog => "Blog",
        Key::BuyHttc => "Comprar HTTC",
        Key::WhitepaperTitle => "Libro blanco de HTTCoin",
        Key::ReadWhitepaper => "Leer el libro blanco",
        _ => return None,
    })
}

fn french(key: Key) -> Option<&'static str> {
    Some(match key {
        Key::NavHome => "Accueil",
        Key::NavDestinations => "Destinations",
        Key::NavTokenomics => "Tokenomics",
        Key::NavPartnerships => "Partenariats",
        Key::NavHowToBuy => "Comment acheter",
        Key::ConnectWallet => "Connecter le portefeuille",
        Key::HeroTitle => "Parcourez le monde, récompensé",
        Key::LaunchCountdown => "Lancement dans",
        Key::GalleryTitle => "HTTCoin autour du monde",
        Key::Subscribe => "S'abonner",
        Key::NavAbout => "À propos",
        Key::BuyHttc => "Acheter HTTC",
        Key::WhitepaperTitle => "Livre blanc HTTCoin",
        Key::ReadWhitepaper => "Lire le livre blanc",
        _ => return None,
    })
}

fn chinese(key: Key) -> Option<&'static str> {
    Some(match key {
        Key::NavHome => "首页",
        Key::NavDestinations => "目的地",
        Key::NavTokenomics => "代币经济",
        Key::NavPartnerships => "合作伙伴",
        Key::NavHowToBuy => "如何购买",
        Key::ConnectWallet => "连接钱包",
        Key::LaunchCountdown => "距离上线",
        Key::Subscribe => "订阅",
        Key::NavAbout => "关于",
        Key::NavWhitepaper => "白皮书",
        Key::BuyHttc => "购买 HTTC",
        Key::WhitepaperTitle => "HTTCoin 白皮书",
        _ => return None,
    })
}

fn arabic(key: Key) -> Option<&'static str> {
    Some(match key {
        Key::NavHome => "الرئيسية",
        Key::NavDestinations => "الوجهات",
        Key::NavHowToBuy => "كيفية الشراء",
        Key::ConnectWallet => "ربط المحفظة",
        Key::LaunchCountdown => "الإطلاق خلال",
        Key::Subscribe => "اشترك",
        Key::NavAbout => "من نحن",
        Key::BuyHttc => "شراء HTTC",
        Key::WhitepaperTitle => "الورقة البيضاء لـ HTTCoin",
        _ => return None,
    })
}

/// Translation of `key`, falling back to English for missing entries.
pub fn t(language: Language, key: Key) -> &'static str {
    let translated = match language {
        Language::En => None,
        Language::Es => spanish(key),
        Language::Fr => french(key),
        Language::Zh => chinese(key),
        Language::Ar => arabic(key),
    };
    translated.unwrap_or_else(|| english(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_loosely() {
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code("fr-CA"), Some(Language::Fr));
        assert_eq!(Language::from_code("zh_TW"), Some(Language::Zh));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn missing_entries_fall_back_to_english() {
        assert_eq!(t(Language::Ar, Key::RoadmapTitle), "Roadmap");
        assert_eq!(t(Language::Es, Key::NavHome), "Inicio");
    }

    #[test]
    fn whitepaper_title_is_translated_for_every_language() {
        for language in Language::ALL {
            assert!(t(language, Key::WhitepaperTitle).contains("HTTCoin"));
        }
        assert_eq!(t(Language::Zh, Key::WhitepaperTitle), "HTTCoin 白皮书");
    }

    #[test]
    fn only_arabic_is_rtl() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert!(Language::ALL.iter().filter(|l| l.is_rtl()).count() == 1);
    }
}

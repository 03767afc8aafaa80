//! Static service content for the Akser landing site.
//!
//! Read-only reference data: the cards feed both the card UI and the journey
//! waypoint placement. `map_position` is the card's location on the terrain
//! in normalized height-field coordinates.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceGroup {
    Energy,
    Grid,
    Solutions,
    Support,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceStatus {
    Active,
    InDevelopment,
}

impl ServiceStatus {
    /// Display label (Norwegian, as shown on the site).
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Active => "Aktiv",
            ServiceStatus::InDevelopment => "I utvikling",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ServiceCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub group: ServiceGroup,
    pub status: ServiceStatus,
    pub featured: bool,
    /// Location on the terrain, normalized [0,1]².
    pub map_position: [f32; 2],
}

pub const SERVICE_CARDS: &[ServiceCard] = &[
    ServiceCard {
        id: "01",
        title: "Vannkraft – Ressursanalyse",
        description: "Dyp innsikt i produksjonsmønstre og systemegenskaper for vannkraft. \
                      Vektlegger løsninger med lavt fotavtrykk i naturen — en viktig referanse \
                      for vurdering av energilokasjoner.",
        image: "/images/services/02-hydropower.png",
        group: ServiceGroup::Energy,
        status: ServiceStatus::Active,
        featured: true,
        map_position: [0.52, 0.18],
    },
    ServiceCard {
        id: "02",
        title: "Solkraft – Lokasjonsvurdering",
        description: "Identifiserer områder med forutsetninger for lønnsom solkraft basert på \
                      terreng, solinnstråling, nettilgang og systemforhold. Prioriterer \
                      lokasjoner med lavt naturinngrep.",
        image: "/images/services/solar.png",
        group: ServiceGroup::Energy,
        status: ServiceStatus::InDevelopment,
        featured: true,
        map_position: [0.38, 0.32],
    },
    ServiceCard {
        id: "09",
        title: "Batteri – Nettstabilitet og Systemfleksibilitet",
        description: "Analyse av lokasjoner der batteriløsninger kan styrke nettstabilitet og \
                      systemfleksibilitet. Avdekker hvor energilagring gir størst verdi for \
                      nettbalanse og langsiktig lønnsomhet.",
        image: "/images/services/battery-park.png",
        group: ServiceGroup::Energy,
        status: ServiceStatus::InDevelopment,
        featured: true,
        map_position: [0.27, 0.48],
    },
    ServiceCard {
        id: "03",
        title: "Nettrisikoanalyse",
        description: "Avdekker reell sannsynlighet for vellykket nettilknytning — ikke bare \
                      fysisk nærhet. Viser hvor flaskehalsene ligger og hvilke lokasjoner som \
                      har bedre forutsetninger.",
        image: "/images/services/grid.png",
        group: ServiceGroup::Grid,
        status: ServiceStatus::Active,
        featured: true,
        map_position: [0.20, 0.62],
    },
    ServiceCard {
        id: "04",
        title: "Produksjonsprofiler og Minimumslast",
        description: "Gir innsikt i energitilgang over tid — ikke bare årsproduksjon. Kritisk \
                      for aktører som trenger forutsigbar effekt, der sesongvariasjon og \
                      minimumslast avgjør lokasjonens reelle verdi.",
        image: "/images/services/03-dam.jpg",
        group: ServiceGroup::Grid,
        status: ServiceStatus::Active,
        featured: true,
        map_position: [0.35, 0.75],
    },
    ServiceCard {
        id: "05",
        title: "Datasenterlokasjoner",
        description: "Avdekker hvilke lokasjoner som har reelle forutsetninger for datasentre — \
                      energi, nett, fiber, kjøling og areal vurderes samlet, med vekt på lavt \
                      naturinngrep.",
        image: "/images/services/datacenter.png",
        group: ServiceGroup::Solutions,
        status: ServiceStatus::Active,
        featured: true,
        map_position: [0.58, 0.85],
    },
    ServiceCard {
        id: "06",
        title: "Kommunal Energikartlegging",
        description: "Helhetlig oversikt over energipotensial, arealkonflikt og strategiske \
                      muligheter. Synliggjør hvilke områder som bør prioriteres — og hvilke som \
                      har vesentlige begrensninger.",
        image: "/images/services/municipality.png",
        group: ServiceGroup::Solutions,
        status: ServiceStatus::Active,
        featured: true,
        map_position: [0.72, 0.64],
    },
    ServiceCard {
        id: "07",
        title: "Regulatorisk Vurdering og Konsesjonsstøtte",
        description: "For prosjekter som har bestått innledende analyse tilbyr vi fordypning i \
                      planstatus, regulatoriske forutsetninger og myndighetsløp. Relevant for \
                      aktører som ønsker å ta utvalgte lokasjoner videre mot realisering.",
        image: "/images/services/regulatory.png",
        group: ServiceGroup::Support,
        status: ServiceStatus::Active,
        featured: false,
        map_position: [0.80, 0.40],
    },
    ServiceCard {
        id: "08",
        title: "Befaring og Feltverifikasjon",
        description: "Fysisk verifikasjon av utvalgte lokasjoner med dronekartlegging og \
                      terrengdokumentasjon. Supplerer den analytiske vurderingen med \
                      stedsspesifikke observasjoner som ikke fanges av fjernanalyse.",
        image: "/images/services/field.png",
        group: ServiceGroup::Support,
        status: ServiceStatus::Active,
        featured: false,
        map_position: [0.66, 0.25],
    },
];

/// Number of stops on the terrain journey.
pub const JOURNEY_ANCHOR_COUNT: usize = 6;

/// The journey cards: the first six featured cards, in declaration order.
pub fn journey_cards() -> impl Iterator<Item = &'static ServiceCard> {
    SERVICE_CARDS
        .iter()
        .filter(|c| c.featured)
        .take(JOURNEY_ANCHOR_COUNT)
}

/// Map positions feeding the waypoint builder, in journey order.
pub fn journey_anchor_positions() -> Vec<[f32; 2]> {
    journey_cards().map(|c| c.map_position).collect()
}

use dioxus::prelude::*;

/// Supported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Es];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }

    /// The language's name in itself, for the picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
        }
    }
}

/// Language gate state. `None` until the visitor picks a language; never persisted.
#[derive(Clone, Copy, PartialEq)]
pub struct LanguageState {
    selected: Signal<Option<Lang>>,
}

impl LanguageState {
    /// Effective language; English while the gate is still up.
    pub fn lang(&self) -> Lang {
        (self.selected)().unwrap_or_default()
    }

    pub fn is_selected(&self) -> bool {
        (self.selected)().is_some()
    }

    pub fn select(&self, lang: Lang) {
        tracing::debug!("i18n.select: lang={}", lang.code());
        let mut selected = self.selected;
        selected.set(Some(lang));
    }
}

/// Provide `LanguageState` to the component tree, starting unselected on every load.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let selected = use_signal(|| None::<Lang>);
    use_context_provider(|| LanguageState { selected });

    rsx! { {children} }
}

pub fn use_language() -> LanguageState {
    if let Some(state) = try_use_context::<LanguageState>() {
        return state;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    tracing::warn!("i18n: missing I18nProvider context, using a local unselected state");
    let selected = use_signal(|| None::<Lang>);
    LanguageState { selected }
}

pub fn use_lang() -> Lang {
    use_language().lang()
}

/// Translate a key for a given language. Falls back to English, then to the key itself.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Common
        (Lang::En, "app.name") => "Permaguanacaste".to_string(),
        (Lang::En, "app.title") => "Permaguanacaste - Transforming Land into Living Ecosystems".to_string(),
        (Lang::Es, "app.title") => "Permaguanacaste - Transformando la Tierra en Ecosistemas Vivos".to_string(),
        (Lang::En, "app.description") => "Expert permaculture design and consultation. We transform your land into beautiful food forests, natural pools, and perennial gardens following Bill Mollison's principles.".to_string(),
        (Lang::Es, "app.description") => "Diseño y consultoría experta en permacultura. Transformamos tu tierra en hermosos bosques comestibles, piscinas naturales y jardines perennes siguiendo los principios de Bill Mollison.".to_string(),
        (Lang::En, "common.close") => "Close".to_string(),
        (Lang::Es, "common.close") => "Cerrar".to_string(),
        (Lang::En, "common.dismiss") => "Dismiss".to_string(),
        (Lang::Es, "common.dismiss") => "Descartar".to_string(),
        (Lang::En, "common.image") => "Image".to_string(),
        (Lang::Es, "common.image") => "Imagen".to_string(),
        (Lang::En, "common.logo_alt") => "Permaguanacaste Logo".to_string(),
        (Lang::Es, "common.logo_alt") => "Logo de Permaguanacaste".to_string(),

        // Language gate
        (Lang::En, "gate.prompt") => "Choose your language".to_string(),
        (Lang::Es, "gate.prompt") => "Elige tu idioma".to_string(),

        // Navigation
        (Lang::En, "nav.projects") => "PROJECTS".to_string(),
        (Lang::Es, "nav.projects") => "PROYECTOS".to_string(),
        (Lang::En, "nav.services") => "SERVICES".to_string(),
        (Lang::Es, "nav.services") => "SERVICIOS".to_string(),
        (Lang::En, "nav.about") => "ABOUT".to_string(),
        (Lang::Es, "nav.about") => "NOSOTROS".to_string(),
        (Lang::En, "nav.contact") => "CONTACT".to_string(),
        (Lang::Es, "nav.contact") => "CONTACTO".to_string(),
        (Lang::En, "nav.toggle") => "Toggle menu".to_string(),
        (Lang::Es, "nav.toggle") => "Abrir o cerrar menú".to_string(),

        // Hero
        (Lang::En, "hero.main_heading") => "Where water shapes the land, we build systems that thrive.".to_string(),
        (Lang::Es, "hero.main_heading") => "Donde el agua da forma a la tierra, construimos sistemas que prosperan.".to_string(),
        (Lang::En, "hero.sub_heading") => "Permaculture design and guidance, and the tools to bring your land to life.".to_string(),
        (Lang::Es, "hero.sub_heading") => "Diseño y guía de permacultura, y las herramientas para dar vida a tu tierra.".to_string(),
        (Lang::En, "hero.background_alt") => "Food systems landscape".to_string(),
        (Lang::Es, "hero.background_alt") => "Paisaje de sistemas alimentarios".to_string(),

        // Intro
        (Lang::En, "intro.title") => "Regenerative Design".to_string(),
        (Lang::Es, "intro.title") => "Diseño Regenerativo".to_string(),
        (Lang::En, "intro.subtitle") => "for Guanacaste Province".to_string(),
        (Lang::Es, "intro.subtitle") => "para la Provincia de Guanacaste".to_string(),
        (Lang::En, "intro.description") => "We design resilient landscapes that work with nature, not against it. From biofiltered pools to thriving food forests, our permaculture approach creates abundance while restoring the land. Whether you're envisioning a family homestead or a commercial retreat, we bring together local wisdom and proven techniques to build something truly sustainable.".to_string(),
        (Lang::Es, "intro.description") => "Diseñamos paisajes resilientes que trabajan con la naturaleza, no en su contra. Desde piscinas biofiltradas hasta bosques comestibles prósperos, nuestro enfoque de permacultura crea abundancia mientras restaura la tierra. Ya sea que estés imaginando una finca familiar o un retiro comercial, combinamos la sabiduría local con técnicas probadas para construir algo verdaderamente sostenible.".to_string(),
        (Lang::En, "intro.coffee_alt") => "Coffee fruits".to_string(),
        (Lang::Es, "intro.coffee_alt") => "Frutos de café".to_string(),
        (Lang::En, "intro.banana_alt") => "Banana tree".to_string(),
        (Lang::Es, "intro.banana_alt") => "Árbol de banano".to_string(),

        // Projects
        (Lang::En, "projects.title") => "Featured Projects".to_string(),
        (Lang::Es, "projects.title") => "Proyectos Destacados".to_string(),
        (Lang::En, "projects.subtitle") => "Each story here reflects our commitment to regenerative practice, whether transforming landscapes into thriving ecosystems or empowering communities with the knowledge to cultivate abundance from their own land.".to_string(),
        (Lang::Es, "projects.subtitle") => "Cada historia aquí refleja nuestro compromiso con la práctica regenerativa, ya sea transformando paisajes en ecosistemas prósperos o empoderando a las comunidades con el conocimiento para cultivar abundancia de su propia tierra.".to_string(),
        (Lang::En, "projects.details_heading") => "Project Details".to_string(),
        (Lang::Es, "projects.details_heading") => "Detalles del Proyecto".to_string(),

        (Lang::En, "projects.finca.title") => "Finca PermaGuanacaste".to_string(),
        (Lang::En, "projects.finca.year") => "2023".to_string(),
        (Lang::En, "projects.finca.category") => "Residential Design".to_string(),
        (Lang::Es, "projects.finca.category") => "Diseño Residencial".to_string(),
        (Lang::En, "projects.finca.details") => "What was once a cattle pasture is now evolving into the living portfolio of PermaGuanacaste. This site is where we actively test, refine, and learn from our regenerative design projects. The work began with a full site assessment to guide long-term planning, including plant surveys, soil analysis, and mapping water flow. Three ponds are under development: a tiled swimming pond with a biofilter and bridge, alongside two ponds dedicated to aquatic plant propagation. Water management systems are being shaped to support these features, while a young food forest consisting of over 50 species is taking root. Ongoing efforts include house construction, composting systems, and expanding habitat plantings. Finca PermaGuanacaste is designed as a work in progress: an evolving landscape that grows with each season and each experiment.".to_string(),
        (Lang::Es, "projects.finca.details") => "Lo que una vez fue un pastizal para ganado ahora está evolucionando hacia el portafolio viviente de PermaGuanacaste. Este sitio es donde probamos activamente, refinamos y aprendemos de nuestros proyectos de diseño regenerativo. El trabajo comenzó con una evaluación completa del sitio para guiar la planificación a largo plazo, incluyendo estudios de plantas, análisis de suelo y mapeo del flujo de agua. Tres estanques están en desarrollo: un estanque de natación embaldosado con un biofiltro y puente, junto con dos estanques dedicados a la propagación de plantas acuáticas. Los sistemas de gestión del agua se están configurando para apoyar estas características, mientras que un joven bosque comestible compuesto por más de 50 especies está echando raíces. Los esfuerzos en curso incluyen construcción de casas, sistemas de compostaje y expansión de plantaciones de hábitat. Finca PermaGuanacaste está diseñada como un trabajo en progreso: un paisaje en evolución que crece con cada temporada y cada experimento.".to_string(),

        (Lang::En, "projects.casa.title") => "La Casa del Árbol".to_string(),
        (Lang::En, "projects.casa.year") => "2016".to_string(),
        (Lang::En, "projects.casa.category") => "Residential Design".to_string(),
        (Lang::Es, "projects.casa.category") => "Diseño Residencial".to_string(),
        (Lang::En, "projects.casa.details") => "Nestled in the rolling hills of Tilarán, this 7-acre family property has been home to two generations who have worked the land with respect and care. Over the years, traditional farming practices have gradually integrated with permaculture design. The property features newly established food forests that complement the natural landscape and existing agricultural areas. At the heart of the property sits a natural swimming pond, its waters filtered by a thriving community of aquatic plants that maintain the ecosystem's balance. The outdoor kitchen, built with local stone, serves as the family's gathering place where fresh harvests from the land are transformed into nourishing meals. This is another project close to home that represents a living portfolio of Permaguanacaste's work, and is a constant source of inspiration for our team.".to_string(),
        (Lang::Es, "projects.casa.details") => "Ubicada en las colinas ondulantes de Tilarán, esta propiedad familiar de 7 acres ha sido hogar de dos generaciones que han trabajado la tierra con respeto y cuidado. A lo largo de los años, las prácticas agrícolas tradicionales se han integrado gradualmente con el diseño de permacultura. La propiedad cuenta con bosques comestibles recién establecidos que complementan el paisaje natural y las áreas agrícolas existentes. En el corazón de la propiedad se encuentra un estanque natural de natación, sus aguas filtradas por una próspera comunidad de plantas acuáticas que mantienen el equilibrio del ecosistema. La cocina al aire libre, construida con piedra local, sirve como lugar de reunión de la familia donde las cosechas frescas de la tierra se transforman en comidas nutritivas. Este es otro proyecto cercano a casa que representa un portafolio viviente del trabajo de Permaguanacaste, y es una fuente constante de inspiración para nuestro equipo.".to_string(),

        (Lang::En, "projects.workshop.title") => "Agroecology Community Workshop".to_string(),
        (Lang::Es, "projects.workshop.title") => "Taller Comunitario de Agroecología".to_string(),
        (Lang::En, "projects.workshop.year") => "2025".to_string(),
        (Lang::En, "projects.workshop.category") => "Community Workshops".to_string(),
        (Lang::Es, "projects.workshop.category") => "Talleres Comunitarios".to_string(),
        (Lang::En, "projects.workshop.details") => "A hands-on educational workshop that brought together local farmers and agroecology experts to share practical knowledge for sustainable agriculture. Over several days, participants learned to build effective greenhouses using low-cost materials, create and apply organic fertilizers, understand soil health through chromatography testing, and the fundamentals of fruit tree cultivation and care. This community-centered approach empowered local growers with accessible techniques that support both food security and environmental stewardship in the region.".to_string(),
        (Lang::Es, "projects.workshop.details") => "Un taller educativo práctico que reunió a agricultores locales y expertos en agroecología para compartir conocimientos prácticos para la agricultura sostenible. Durante varios días, los participantes aprendieron a construir invernaderos efectivos usando materiales de bajo costo, crear y aplicar fertilizantes orgánicos, entender la salud del suelo a través de pruebas de cromatografía, y los fundamentos del cultivo y cuidado de árboles frutales. Este enfoque centrado en la comunidad empoderó a los cultivadores locales con técnicas accesibles que apoyan tanto la seguridad alimentaria como la administración ambiental en la región.".to_string(),

        // Services
        (Lang::En, "services.title") => "Our Services".to_string(),
        (Lang::Es, "services.title") => "Nuestros Servicios".to_string(),
        (Lang::En, "services.subtitle") => "We offer comprehensive permaculture design services tailored to the unique ecosystem of Guanacaste Province.".to_string(),
        (Lang::Es, "services.subtitle") => "Ofrecemos servicios integrales de diseño de permacultura adaptados al ecosistema único de la Provincia de Guanacaste.".to_string(),
        (Lang::En, "services.features_heading") => "What's included".to_string(),
        (Lang::Es, "services.features_heading") => "Qué incluye".to_string(),
        (Lang::En, "services.learn_more") => "Learn more".to_string(),
        (Lang::Es, "services.learn_more") => "Ver más".to_string(),

        (Lang::En, "services.masterplan.title") => "Whole Systems Design Plan".to_string(),
        (Lang::Es, "services.masterplan.title") => "Plan de Diseño de Sistemas Integrales".to_string(),
        (Lang::En, "services.masterplan.description") => "Our concept development plan is a collaborative, hands-on process that blends your vision with our expertise to unlock the full potential of your land. Through open dialogue, in-depth site visits, and detailed assessments, we create a tailored roadmap that guides you from concept to implementation with clarity and confidence. The plan may include conceptual maps, planting layouts, system recommendations, phased timelines, and cost estimates, making it ideal for projects with multiple stages, complex landscapes, or diverse integrated systems.".to_string(),
        (Lang::Es, "services.masterplan.description") => "Nuestro plan de desarrollo de conceptos es un proceso colaborativo y práctico que combina tu visión con nuestra experiencia para desbloquear todo el potencial de tu tierra. A través de diálogo abierto, visitas exhaustivas al sitio y evaluaciones detalladas, creamos una hoja de ruta personalizada que te guía desde el concepto hasta la implementación con claridad y confianza. El plan puede incluir mapas conceptuales, diseños de plantación, recomendaciones de sistemas, cronogramas por fases y estimaciones de costos, haciéndolo ideal para proyectos con múltiples etapas, paisajes complejos o diversos sistemas integrados.".to_string(),
        (Lang::En, "services.masterplan.feature.1") => "Zoning & Layout".to_string(),
        (Lang::Es, "services.masterplan.feature.1") => "Zonificación y Distribución".to_string(),
        (Lang::En, "services.masterplan.feature.2") => "Infrastructure Planning".to_string(),
        (Lang::Es, "services.masterplan.feature.2") => "Planificación de Infraestructura".to_string(),
        (Lang::En, "services.masterplan.feature.3") => "System Integration".to_string(),
        (Lang::Es, "services.masterplan.feature.3") => "Integración de Sistemas".to_string(),
        (Lang::En, "services.masterplan.feature.4") => "Phased Implementation".to_string(),
        (Lang::Es, "services.masterplan.feature.4") => "Implementación por Fases".to_string(),

        (Lang::En, "services.pools.title") => "Biofiltered Swimming Pools".to_string(),
        (Lang::Es, "services.pools.title") => "Piscinas Biofiltradas".to_string(),
        (Lang::En, "services.pools.description") => "Building natural swimming pools is where our expertise truly shines. Experience the luxury of swimming in pure, living water in harmony with nature. Our biofiltered pools use plants and beneficial microbes to keep your water crystal clear without harsh chemicals. We work with the water on your land and guide you through material options, cost estimates, and designs tailored to your style and needs. From child-friendly family pools to peaceful retreats, each pool enhances your landscape and supports local biodiversity. Plus, we provide ongoing maintenance to keep your pool healthy, vibrant, and beautifully balanced for years to come.".to_string(),
        (Lang::Es, "services.pools.description") => "La construcción de piscinas naturales es donde nuestra experiencia realmente brilla. Experimenta el lujo de nadar en agua pura y viva en armonía con la naturaleza. Nuestras piscinas biofiltradas utilizan plantas y microbios beneficiosos para mantener tu agua cristalina sin químicos agresivos. Trabajamos con el agua en tu tierra y te guiamos a través de opciones de materiales, estimaciones de costos y diseños adaptados a tu estilo y necesidades. Desde piscinas familiares amigables para niños hasta retiros pacíficos, cada piscina mejora tu paisaje y apoya la biodiversidad local. Además, proporcionamos mantenimiento continuo para mantener tu piscina saludable, vibrante y bellamente equilibrada durante años.".to_string(),
        (Lang::En, "services.pools.feature.1") => "Natural Filtration".to_string(),
        (Lang::Es, "services.pools.feature.1") => "Filtración Natural".to_string(),
        (Lang::En, "services.pools.feature.2") => "Swimming Pool Design".to_string(),
        (Lang::Es, "services.pools.feature.2") => "Diseño de Piscinas".to_string(),
        (Lang::En, "services.pools.feature.3") => "Pond Ecosystems".to_string(),
        (Lang::Es, "services.pools.feature.3") => "Ecosistemas de Estanques".to_string(),
        (Lang::En, "services.pools.feature.4") => "Water Conservation".to_string(),
        (Lang::Es, "services.pools.feature.4") => "Conservación del Agua".to_string(),

        (Lang::En, "services.food_systems.title") => "Regenerative Food Systems".to_string(),
        (Lang::Es, "services.food_systems.title") => "Sistemas Alimentarios Regenerativos".to_string(),
        (Lang::En, "services.food_systems.description") => "Transform your land into a thriving, productive ecosystem that nourishes both people and soil. We begin by assessing your site and leveraging our deep knowledge of local plants to design food forests and edible landscapes tailored to your environment. Using sustainable agroforestry and polyculture techniques that mimic natural forest systems, we carefully select and arrange species to build biodiversity, improve soil health, and ensure safe, abundant harvests year-round. Throughout the process, we prioritize practices that reduce external inputs and promote resilience, helping your food forest become more productive and self-sustaining over time.".to_string(),
        (Lang::Es, "services.food_systems.description") => "Transforma tu tierra en un ecosistema próspero y productivo que nutre tanto a las personas como al suelo. Comenzamos evaluando tu sitio y aprovechando nuestro profundo conocimiento de plantas locales para diseñar bosques comestibles y paisajes comestibles adaptados a tu ambiente. Usando técnicas sostenibles de agroforestería y policultivo que imitan los sistemas forestales naturales, seleccionamos y organizamos cuidadosamente las especies para construir biodiversidad, mejorar la salud del suelo y asegurar cosechas seguras y abundantes durante todo el año. A lo largo del proceso, priorizamos prácticas que reducen los insumos externos y promueven la resistencia, ayudando a que tu bosque comestible se vuelva más productivo y autosuficiente con el tiempo.".to_string(),
        (Lang::En, "services.food_systems.feature.1") => "Polyculture Design".to_string(),
        (Lang::Es, "services.food_systems.feature.1") => "Diseño de Policultivos".to_string(),
        (Lang::En, "services.food_systems.feature.2") => "Crop Rotation Planning".to_string(),
        (Lang::Es, "services.food_systems.feature.2") => "Planificación de Rotación de Cultivos".to_string(),
        (Lang::En, "services.food_systems.feature.3") => "Companion Planting".to_string(),
        (Lang::Es, "services.food_systems.feature.3") => "Cultivos Asociados".to_string(),
        (Lang::En, "services.food_systems.feature.4") => "Yield Optimization".to_string(),
        (Lang::Es, "services.food_systems.feature.4") => "Optimización de Cosechas".to_string(),

        (Lang::En, "services.soil_health.title") => "Soil Health Management".to_string(),
        (Lang::Es, "services.soil_health.title") => "Gestión de la Salud del Suelo".to_string(),
        (Lang::En, "services.soil_health.description") => "Healthy soil is the foundation of all thriving ecosystems, and our expertise ensures yours reaches its full potential. We begin with thorough soil testing to assess quality and identify specific needs. Using this data, we tailor organic soil management practices that support beneficial microbial life, enhance water retention, and build lasting fertility. Our approach blends time-tested composting techniques with modern soil science, including the application of organic fertilizers and amendments. The result is living, nutrient-rich soil that promotes vigorous plant growth, sequesters carbon, and improves the overall health and resilience of your land.".to_string(),
        (Lang::Es, "services.soil_health.description") => "El suelo saludable es la base de todos los ecosistemas prósperos, y nuestra experiencia asegura que el tuyo alcance su máximo potencial. Comenzamos con pruebas exhaustivas del suelo para evaluar la calidad e identificar necesidades específicas. Usando estos datos, adaptamos prácticas orgánicas de gestión del suelo que apoyan la vida microbiana beneficiosa, mejoran la retención de agua y construyen fertilidad duradera. Nuestro enfoque combina técnicas de compostaje probadas en el tiempo con ciencia moderna del suelo, incluyendo la aplicación de fertilizantes orgánicos y enmiendas. El resultado es suelo vivo y rico en nutrientes que promueve el crecimiento vigoroso de las plantas, secuestra carbono y mejora la salud general y resistencia de tu tierra.".to_string(),
        (Lang::En, "services.soil_health.feature.1") => "Soil Testing & Analysis".to_string(),
        (Lang::Es, "services.soil_health.feature.1") => "Pruebas y Análisis de Suelo".to_string(),
        (Lang::En, "services.soil_health.feature.2") => "Composting Systems".to_string(),
        (Lang::Es, "services.soil_health.feature.2") => "Sistemas de Compostaje".to_string(),
        (Lang::En, "services.soil_health.feature.3") => "Cover Crop Integration".to_string(),
        (Lang::Es, "services.soil_health.feature.3") => "Integración de Cultivos de Cobertura".to_string(),
        (Lang::En, "services.soil_health.feature.4") => "Erosion Control".to_string(),
        (Lang::Es, "services.soil_health.feature.4") => "Control de Erosión".to_string(),

        (Lang::En, "services.landscaping.title") => "Ongoing Landscape Care".to_string(),
        (Lang::Es, "services.landscaping.title") => "Cuidado Continuo del Paisaje".to_string(),
        (Lang::En, "services.landscaping.description") => "Maintain the health and vitality of your regenerative landscape with our year-round, seasonally adapted care services. Guanacaste's unique blend of dry tropical forests, moist deciduous woodlands, and riverine ecosystems demands attentive stewardship through distinct wet and dry seasons. Whether you're on-site or away, our expert team provides tailored maintenance that respects these natural rhythms, from pruning and seasonal plantings during the rainy season to strategic soil building and water conservation efforts throughout the dry months. By aligning care with the land's ecological cycles, we help your landscape thrive sustainably and continue evolving in harmony with its environment.".to_string(),
        (Lang::Es, "services.landscaping.description") => "Mantén la salud y vitalidad de tu paisaje regenerativo con nuestros servicios de cuidado durante todo el año, adaptados estacionalmente. La mezcla única de Guanacaste de bosques tropicales secos, bosques deciduos húmedos y ecosistemas ribereños demanda administración atenta a través de estaciones húmedas y secas distintas. Ya sea que estés en el sitio o ausente, nuestro equipo experto proporciona mantenimiento personalizado que respeta estos ritmos naturales, desde poda y plantaciones estacionales durante la temporada lluviosa hasta esfuerzos estratégicos de construcción de suelo y conservación de agua durante los meses secos. Al alinear el cuidado con los ciclos ecológicos de la tierra, ayudamos a que tu paisaje prospere sosteniblemente y continúe evolucionando en armonía con su ambiente.".to_string(),
        (Lang::En, "services.landscaping.feature.1") => "Seasonal Pruning".to_string(),
        (Lang::Es, "services.landscaping.feature.1") => "Poda Estacional".to_string(),
        (Lang::En, "services.landscaping.feature.2") => "Rainy Season Plantings".to_string(),
        (Lang::Es, "services.landscaping.feature.2") => "Siembras de Temporada Lluviosa".to_string(),
        (Lang::En, "services.landscaping.feature.3") => "Dry Season Water Conservation".to_string(),
        (Lang::Es, "services.landscaping.feature.3") => "Conservación de Agua en Época Seca".to_string(),
        (Lang::En, "services.landscaping.feature.4") => "Soil Building".to_string(),
        (Lang::Es, "services.landscaping.feature.4") => "Construcción de Suelo".to_string(),

        // Food systems detail page
        (Lang::En, "food_systems.heading") => "Food System Designs".to_string(),
        (Lang::Es, "food_systems.heading") => "Diseños de Sistemas Alimentarios".to_string(),
        (Lang::En, "food_systems.tagline") => "Regenerative Food Production Systems".to_string(),
        (Lang::Es, "food_systems.tagline") => "Sistemas Regenerativos de Producción de Alimentos".to_string(),
        (Lang::En, "food_systems.tagline2") => "From Garden to Table".to_string(),
        (Lang::Es, "food_systems.tagline2") => "Del Huerto a la Mesa".to_string(),
        (Lang::En, "food_systems.forest.title") => "Food Forest Design".to_string(),
        (Lang::Es, "food_systems.forest.title") => "Diseño de Bosques Comestibles".to_string(),
        (Lang::En, "food_systems.forest.p1") => "Our food forest designs mimic natural forest ecosystems while producing abundant harvests. We create multi-layered systems with canopy trees, understory shrubs, herbaceous plants, ground covers, and root crops that work together symbiotically.".to_string(),
        (Lang::Es, "food_systems.forest.p1") => "Nuestros diseños de bosques comestibles imitan los ecosistemas forestales naturales mientras producen cosechas abundantes. Creamos sistemas de varios estratos con árboles de dosel, arbustos de sotobosque, plantas herbáceas, coberturas de suelo y cultivos de raíz que trabajan juntos de forma simbiótica.".to_string(),
        (Lang::En, "food_systems.forest.p2") => "These self-sustaining systems require minimal maintenance once established, providing year-round food production while building soil health, sequestering carbon, and creating habitat for beneficial wildlife.".to_string(),
        (Lang::Es, "food_systems.forest.p2") => "Estos sistemas autosuficientes requieren un mantenimiento mínimo una vez establecidos, y brindan producción de alimentos todo el año mientras construyen salud del suelo, secuestran carbono y crean hábitat para la fauna benéfica.".to_string(),
        (Lang::En, "food_systems.market.title") => "Market Garden Systems".to_string(),
        (Lang::Es, "food_systems.market.title") => "Sistemas de Huertas Comerciales".to_string(),
        (Lang::En, "food_systems.market.p1") => "We design intensive market garden systems that maximize production in small spaces using permaculture principles. Our designs incorporate companion planting, succession planting, and integrated pest management for optimal yields.".to_string(),
        (Lang::Es, "food_systems.market.p1") => "Diseñamos huertas comerciales intensivas que maximizan la producción en espacios pequeños usando principios de permacultura. Nuestros diseños incorporan cultivos asociados, siembras escalonadas y manejo integrado de plagas para lograr rendimientos óptimos.".to_string(),
        (Lang::En, "food_systems.market.p2") => "These systems are perfect for families wanting fresh produce year-round or small-scale farmers looking to increase productivity while reducing external inputs and building long-term soil fertility.".to_string(),
        (Lang::Es, "food_systems.market.p2") => "Estos sistemas son ideales para familias que desean productos frescos todo el año o pequeños agricultores que buscan aumentar su productividad mientras reducen insumos externos y construyen fertilidad del suelo a largo plazo.".to_string(),
        (Lang::En, "food_systems.livestock.title") => "Integrated Livestock Systems".to_string(),
        (Lang::Es, "food_systems.livestock.title") => "Sistemas Integrados de Ganadería".to_string(),
        (Lang::En, "food_systems.livestock.p1") => "Our livestock integration designs create beneficial relationships between animals and plants. Chickens provide pest control and fertilizer, goats clear brush and provide milk, and rotational grazing systems improve pasture health.".to_string(),
        (Lang::Es, "food_systems.livestock.p1") => "Nuestros diseños de integración animal crean relaciones beneficiosas entre animales y plantas. Las gallinas aportan control de plagas y abono, las cabras limpian maleza y dan leche, y los sistemas de pastoreo rotativo mejoran la salud de los potreros.".to_string(),
        (Lang::En, "food_systems.livestock.p2") => "These systems close nutrient loops, reduce waste, and create diverse income streams while maintaining animal welfare and environmental health. Every element serves multiple functions in the overall food production system.".to_string(),
        (Lang::Es, "food_systems.livestock.p2") => "Estos sistemas cierran ciclos de nutrientes, reducen desperdicios y crean fuentes de ingreso diversas, manteniendo el bienestar animal y la salud ambiental. Cada elemento cumple múltiples funciones dentro del sistema de producción.".to_string(),
        (Lang::En, "food_systems.seed.title") => "Seed to Table Planning".to_string(),
        (Lang::Es, "food_systems.seed.title") => "Planificación de la Semilla a la Mesa".to_string(),
        (Lang::En, "food_systems.seed.p1") => "We design complete food systems that include seed saving, food processing, preservation, and storage facilities. Our holistic approach ensures food security and reduces dependence on external food sources.".to_string(),
        (Lang::Es, "food_systems.seed.p1") => "Diseñamos sistemas alimentarios completos que incluyen resguardo de semillas, procesamiento, conservación y almacenamiento de alimentos. Nuestro enfoque integral asegura la seguridad alimentaria y reduce la dependencia de fuentes externas.".to_string(),
        (Lang::En, "food_systems.seed.p2") => "From planning seasonal harvests to designing root cellars and fermentation spaces, we help you create a complete food system that provides nourishment throughout the year while connecting you deeply to your land and food sources.".to_string(),
        (Lang::Es, "food_systems.seed.p2") => "Desde planificar cosechas estacionales hasta diseñar bodegas y espacios de fermentación, te ayudamos a crear un sistema alimentario completo que te nutre durante todo el año y te conecta profundamente con tu tierra y tus alimentos.".to_string(),

        // Service page
        (Lang::En, "service_page.back") => "Back to home".to_string(),
        (Lang::Es, "service_page.back") => "Volver al inicio".to_string(),
        (Lang::En, "service_page.cta") => "Book a free consultation".to_string(),
        (Lang::Es, "service_page.cta") => "Agenda una consulta gratuita".to_string(),

        // Story
        (Lang::En, "story.title") => "Our Story".to_string(),
        (Lang::Es, "story.title") => "Nuestra Historia".to_string(),
        (Lang::En, "story.company") => "Permaguanacaste was founded in 2020 out of a passion for reconnecting people with the land through thoughtful, regenerative design. Rooted in the unique ecosystems of Guanacaste, we combine local knowledge with international permaculture expertise to create landscapes that support both ecological health and community well-being. Our work is driven by a commitment to foster abundance, resilience, and lasting harmony between people and nature.".to_string(),
        (Lang::Es, "story.company") => "Permaguanacaste fue fundada en 2020 por una pasión por reconectar a las personas con la tierra a través del diseño reflexivo y regenerativo. Arraigados en los ecosistemas únicos de Guanacaste, combinamos el conocimiento local con la experiencia internacional en permacultura para crear paisajes que apoyen tanto la salud ecológica como el bienestar comunitario. Nuestro trabajo está impulsado por un compromiso de fomentar la abundancia, resistencia y armonía duradera entre las personas y la naturaleza.".to_string(),
        (Lang::En, "story.bio1") => "Born and raised in the heart of Guanacaste Province, our founder Gabriel grew up surrounded by the diverse ecosystems that define this remarkable region of Costa Rica. From the dry tropical forests to the fertile valleys, this land has been both his classroom and home. Growing up here meant learning to read the subtle signs of the seasons, understanding how water moves across the landscape, and developing a deep knowledge of native terrestrial and aquatic plants that thrive in this climate.".to_string(),
        (Lang::Es, "story.bio1") => "Nacido y criado en el corazón de la Provincia de Guanacaste, nuestro fundador Gabriel creció rodeado de los diversos ecosistemas que definen esta región notable de Costa Rica. Desde los bosques tropicales secos hasta los valles fértiles, esta tierra ha sido tanto su aula como su hogar. Crecer aquí significó aprender a leer las señales sutiles de las estaciones, entender cómo se mueve el agua a través del paisaje y desarrollar un conocimiento profundo de las plantas terrestres y acuáticas nativas que prosperan en este clima.".to_string(),
        (Lang::En, "story.bio2") => "Gabriel's journey began with hands-on mechanical work, developing a practical understanding of systems and problem-solving. His passion for sustainable living led him to study permaculture techniques in Argentina, gaining expertise in regenerative agricultural practices and holistic land management. This foundation took him to Switzerland, where he spent ten years as part of a specialized company dedicated to building natural pools and restoring biodiversity to both agricultural and urban landscapes. Returning home to Guanacaste, he was driven by a vision to establish a company that would channel his experiences toward protecting and enhancing the natural heritage of his province, creating a bridge between traditional Costa Rican land wisdom and permaculture practices.".to_string(),
        (Lang::Es, "story.bio2") => "El viaje de Gabriel comenzó con trabajo mecánico práctico, desarrollando una comprensión práctica de sistemas y resolución de problemas. Su pasión por la vida sostenible lo llevó a estudiar técnicas de permacultura en Argentina, ganando experiencia en prácticas agrícolas regenerativas y gestión holística de la tierra. Esta base lo llevó a Suiza, donde pasó diez años como parte de una empresa especializada dedicada a construir piscinas naturales y restaurar la biodiversidad tanto en paisajes agrícolas como urbanos. Al regresar a casa a Guanacaste, fue impulsado por una visión de establecer una empresa que canalizaría sus experiencias hacia la protección y mejora del patrimonio natural de su provincia, creando un puente entre la sabiduría tradicional costarricense de la tierra y las prácticas de permacultura.".to_string(),
        (Lang::En, "story.portrait_alt") => "Permaguanacaste founder".to_string(),
        (Lang::Es, "story.portrait_alt") => "Fundador de Permaguanacaste".to_string(),

        // Contact
        (Lang::En, "contact.title") => "Let's Create Something Beautiful Together".to_string(),
        (Lang::Es, "contact.title") => "Creemos Algo Hermoso Juntos".to_string(),
        (Lang::En, "contact.subtitle") => "Whether you're envisioning a thriving food forest, a crystal-clear biofiltered pool, or a complete landscape transformation, we're here to help bring your vision to life.".to_string(),
        (Lang::Es, "contact.subtitle") => "Ya sea que estés imaginando un bosque comestible próspero, una piscina biofiltrada cristalina o una transformación completa del paisaje, estamos aquí para ayudar a dar vida a tu visión.".to_string(),
        (Lang::En, "contact.form.heading") => "Book Your Free Consultation".to_string(),
        (Lang::Es, "contact.form.heading") => "Agenda tu Consulta Gratuita".to_string(),
        (Lang::En, "contact.form.full_name") => "Full Name".to_string(),
        (Lang::Es, "contact.form.full_name") => "Nombre Completo".to_string(),
        (Lang::En, "contact.form.email") => "Email Address".to_string(),
        (Lang::Es, "contact.form.email") => "Dirección de Correo Electrónico".to_string(),
        (Lang::En, "contact.form.phone") => "Phone Number".to_string(),
        (Lang::Es, "contact.form.phone") => "Número de Teléfono".to_string(),
        (Lang::En, "contact.form.phone_ph") => "+1 (555) 123-4567".to_string(),
        (Lang::En, "contact.form.contact_time") => "Let us know the best time to contact you".to_string(),
        (Lang::Es, "contact.form.contact_time") => "Cuéntanos el mejor momento para contactarte".to_string(),
        (Lang::En, "contact.form.contact_time_ph") => "e.g., Weekday mornings, Tuesday 2-4pm, Anytime this week...".to_string(),
        (Lang::Es, "contact.form.contact_time_ph") => "p. ej., mañanas entre semana, martes de 2 a 4 pm, cualquier momento esta semana...".to_string(),
        (Lang::En, "contact.form.project_description") => "Tell us about your land and project".to_string(),
        (Lang::Es, "contact.form.project_description") => "Cuéntanos sobre tu terreno y tu proyecto".to_string(),
        (Lang::En, "contact.form.project_description_ph") => "Describe your land, vision, and what you're hoping to achieve. Include details about location, size, current state, and your goals...".to_string(),
        (Lang::Es, "contact.form.project_description_ph") => "Describe tu terreno, tu visión y lo que esperas lograr. Incluye detalles sobre ubicación, tamaño, estado actual y tus objetivos...".to_string(),
        (Lang::En, "contact.form.submit") => "Send Message".to_string(),
        (Lang::Es, "contact.form.submit") => "Enviar Mensaje".to_string(),
        (Lang::En, "contact.form.submitting") => "Sending...".to_string(),
        (Lang::Es, "contact.form.submitting") => "Enviando...".to_string(),
        (Lang::En, "contact.form.success_title") => "Message Sent Successfully!".to_string(),
        (Lang::Es, "contact.form.success_title") => "¡Mensaje Enviado Exitosamente!".to_string(),
        (Lang::En, "contact.form.success_message") => "Thank you for reaching out. We'll get back to you within 24 hours to discuss your project.".to_string(),
        (Lang::Es, "contact.form.success_message") => "Gracias por contactarnos. Te responderemos dentro de 24 horas para discutir tu proyecto.".to_string(),
        (Lang::En, "contact.form.new_message") => "Send Another Message".to_string(),
        (Lang::Es, "contact.form.new_message") => "Enviar Otro Mensaje".to_string(),
        (Lang::En, "contact.error.required") => "This field is required.".to_string(),
        (Lang::Es, "contact.error.required") => "Este campo es obligatorio.".to_string(),
        (Lang::En, "contact.error.email") => "Please enter a valid email address.".to_string(),
        (Lang::Es, "contact.error.email") => "Ingresa una dirección de correo válida.".to_string(),
        (Lang::En, "contact.failure.title") => "We couldn't send your message".to_string(),
        (Lang::Es, "contact.failure.title") => "No pudimos enviar tu mensaje".to_string(),
        (Lang::En, "contact.failure.body") => "There was an error submitting your form. Please try again or contact us directly via WhatsApp at {whatsapp}.".to_string(),
        (Lang::Es, "contact.failure.body") => "Hubo un error al enviar tu formulario. Inténtalo de nuevo o contáctanos directamente por WhatsApp al {whatsapp}.".to_string(),
        (Lang::En, "contact.direct.heading") => "Prefer to talk directly?".to_string(),
        (Lang::Es, "contact.direct.heading") => "¿Prefieres hablar directamente?".to_string(),
        (Lang::En, "contact.direct.body") => "Message us on WhatsApp and we'll reply as soon as we're back from the field.".to_string(),
        (Lang::Es, "contact.direct.body") => "Escríbenos por WhatsApp y te responderemos en cuanto volvamos del campo.".to_string(),
        (Lang::En, "contact.direct.whatsapp") => "Chat on WhatsApp".to_string(),
        (Lang::Es, "contact.direct.whatsapp") => "Escríbenos por WhatsApp".to_string(),
        (Lang::En, "contact.whatsapp_greeting") => "Hi Permaguanacaste, I'm interested in learning more about your permaculture design services.".to_string(),
        (Lang::Es, "contact.whatsapp_greeting") => "Hola Permaguanacaste, me interesa saber más sobre sus servicios de diseño de permacultura.".to_string(),

        // Footer
        (Lang::En, "footer.contact") => "CONTACT".to_string(),
        (Lang::Es, "footer.contact") => "CONTACTO".to_string(),
        (Lang::En, "footer.navigation") => "NAVIGATION".to_string(),
        (Lang::Es, "footer.navigation") => "NAVEGACIÓN".to_string(),
        (Lang::En, "footer.follow") => "FOLLOW US".to_string(),
        (Lang::Es, "footer.follow") => "SÍGUENOS".to_string(),
        (Lang::En, "footer.province") => "Guanacaste Province".to_string(),
        (Lang::Es, "footer.province") => "Provincia de Guanacaste".to_string(),
        (Lang::En, "footer.country") => "Costa Rica".to_string(),
        (Lang::En, "footer.rights") => "All rights reserved.".to_string(),
        (Lang::Es, "footer.rights") => "Todos los derechos reservados.".to_string(),
        (Lang::En, "footer.tagline") => "Regenerative design for a sustainable future.".to_string(),
        (Lang::Es, "footer.tagline") => "Diseño regenerativo para un futuro sostenible.".to_string(),

        // Not found
        (Lang::En, "not_found.title") => "Page not found".to_string(),
        (Lang::Es, "not_found.title") => "Página no encontrada".to_string(),
        (Lang::En, "not_found.body") => "The page you were looking for doesn't exist or has moved.".to_string(),
        (Lang::Es, "not_found.body") => "La página que buscas no existe o fue movida.".to_string(),

        // Fallback: use the English string if present, else show key.
        (Lang::Es, k) => t(Lang::En, k),
        (Lang::En, _) => key.to_string(),
    }
}

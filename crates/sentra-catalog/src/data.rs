//! The SentraIntel product catalog.
//!
//! A hand-maintained constant table: three product lines of three products
//! each. Built once on first access and immutable afterwards; every surface
//! (pages, CLI) reads the same [`Catalog`] instance.

use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Badge, CategoryIcon, Product, ProductCategory, ProductDetails};

/// Shared fallback image for products without their own asset
pub const DEFAULT_PRODUCT_IMAGE: &str = "/images/default-product.jpg";

/// The full product catalog
#[derive(Debug, Serialize)]
pub struct Catalog {
    categories: Vec<ProductCategory>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Shared catalog instance, built on first access
    pub fn get() -> &'static Catalog {
        CATALOG.get_or_init(|| Catalog {
            categories: vec![sentra_route(), sentra_shield(), sentra_insight()],
        })
    }

    /// All categories in display order
    pub fn categories(&self) -> &[ProductCategory] {
        &self.categories
    }

    /// Category by display index
    pub fn category(&self, index: usize) -> Option<&ProductCategory> {
        self.categories.get(index)
    }

    /// Category by slug, with its display index
    pub fn category_by_slug(&self, slug: &str) -> Option<(usize, &ProductCategory)> {
        self.categories
            .iter()
            .enumerate()
            .find(|(_, c)| c.slug() == slug)
    }

    /// Product by slug within one category
    pub fn find_product(&self, category_index: usize, slug: &str) -> Option<&Product> {
        self.category(category_index)
            .and_then(|c| c.products.iter().find(|p| p.slug() == slug))
    }

    /// Product by slug across all categories, with its category
    pub fn find_product_anywhere(&self, slug: &str) -> Option<(&ProductCategory, &Product)> {
        self.categories.iter().find_map(|category| {
            category
                .products
                .iter()
                .find(|p| p.slug() == slug)
                .map(|p| (category, p))
        })
    }

    /// Category by slug, or a reportable error for CLI surfaces
    pub fn require_category(&self, slug: &str) -> CatalogResult<&ProductCategory> {
        self.category_by_slug(slug).map(|(_, c)| c).ok_or_else(|| {
            tracing::debug!(slug, "category lookup miss");
            CatalogError::CategoryNotFound(slug.to_string())
        })
    }

    /// Product by slug across all categories, or a reportable error
    pub fn require_product(&self, slug: &str) -> CatalogResult<(&ProductCategory, &Product)> {
        self.find_product_anywhere(slug).ok_or_else(|| {
            tracing::debug!(slug, "product lookup miss");
            CatalogError::ProductNotFound(slug.to_string())
        })
    }

    /// First product of each category, for the home page showcase
    pub fn featured(&self) -> Vec<(&ProductCategory, &Product)> {
        self.categories
            .iter()
            .filter_map(|c| c.products.first().map(|p| (c, p)))
            .collect()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn specs(rows: &[(&str, &str)]) -> Vec<(String, String)> {
    rows.iter()
        .map(|(label, value)| (label.to_string(), value.to_string()))
        .collect()
}

fn badge(text: &str, color: &str) -> Option<Badge> {
    Some(Badge {
        text: text.to_string(),
        color: color.to_string(),
    })
}

fn sentra_route() -> ProductCategory {
    ProductCategory {
        name: "Sentra Route".into(),
        icon: CategoryIcon::Radio,
        description: "Advanced Tactical Solutions".into(),
        color: "from-blue-500 to-blue-700".into(),
        slug: Some("sentra-route".into()),
        image: Some("/images/sentra-route-category.jpg".into()),
        tagline: Some("Strategic Communication Excellence".into()),
        products: vec![
            Product {
                name: "Sentra Route X1".into(),
                description: "Advanced RF control system for selective mobile communication \
                    management, preventing unauthorized cell phone usage in secure environments."
                    .into(),
                slug: Some("sentra-route-x1".into()),
                image: Some("/images/sentra-route-x1.jpg".into()),
                badge: badge("Flagship", "bg-blue-600"),
                features: strings(&[
                    "Supports 2G, 3G, 4G, 4.5G, 5G NSA",
                    "16 simultaneous downlink channels",
                    "Independent amplifiers per band",
                    "RF power per channel: 30W (2G/3G/4G)",
                    "Total RF amplification power up to 240W",
                ]),
                details: Some(ProductDetails {
                    overview: Some(
                        "The Sentra Route X1 provides advanced selective routing capabilities \
                         designed for seamless integration with cellular networks. It supports \
                         multi-band technologies and enables selective rerouting of mobile \
                         communications without service disruption, optimized for complex \
                         operational scenarios."
                            .into(),
                    ),
                    specifications: specs(&[
                        ("Supported Technologies", "2G, 3G, 4G, 4.5G, 5G NSA"),
                        ("Downlink Bands", "700MHz, 850MHz, 1900MHz, 2100MHz, 2600MHz"),
                        ("Total Channels", "16 simultaneous channels"),
                        ("RF Power per Channel", "30W for 2G/3G/4G"),
                        ("Total RF Power", "Up to 240W"),
                        ("Weight", "35kg +/- 2kg"),
                        ("Dimensions", "62.9 x 49.7 x 35.3 cm"),
                        ("Power Supply", "12VDC vehicular, 110/220VAC"),
                    ]),
                    use_cases: strings(&[
                        "Secure communications rerouting",
                        "Tactical field deployments",
                        "Critical infrastructure protection",
                        "Sensitive operational environments",
                    ]),
                    benefits: strings(&[
                        "Non-disruptive communication management",
                        "High-power RF amplification for broad coverage",
                        "Rapid deployment in tactical operations",
                        "Optimized for field and stationary scenarios",
                    ]),
                    compatible_with: strings(&[
                        "Sentra Analytics Platform",
                        "Third-party tactical systems",
                        "Standard API integrations",
                    ]),
                }),
            },
            Product {
                name: "Sentra IMSI Catcher".into(),
                description: "Mobile signal interception and RF control technology for secure \
                    environments, preventing unauthorized cellular activity. Real-time monitoring."
                    .into(),
                slug: Some("sentra-route-mobile".into()),
                image: Some("/images/sentra-imsi-catcher.jpg".into()),
                badge: badge("Covert", "bg-blue-400"),
                features: strings(&[
                    "Capture IMSI and IMEI across 2G, 3G, 4G, 4.5G, 5G NSA",
                    "8 simultaneous capture channels",
                    "Automatic location triangulation",
                    "Portable DF (Direction Finding) module",
                    "Real-time remote monitoring and management",
                ]),
                details: Some(ProductDetails {
                    overview: Some(
                        "The Sentra IMSI Catcher is engineered to capture and analyze IMSI and \
                         IMEI data from mobile devices. It provides extensive coverage of mobile \
                         signals with advanced localization capabilities, ideal for tactical \
                         operations requiring discrete device monitoring."
                            .into(),
                    ),
                    specifications: specs(&[
                        ("Technologies Supported", "2G, 3G, 4G, 4.5G, 5G NSA"),
                        ("Bands Supported", "850MHz, 1900MHz, 700MHz, 2100MHz, 2600MHz"),
                        ("Simultaneous Channels", "8"),
                        ("RF Power per Channel", "30W (2G/3G), 20W (4G)"),
                        ("Capture Capabilities", "IMSI, IMEI, TMSI, RSSI, location"),
                        ("Weight", "45kg +/- 2kg"),
                        ("Dimensions", "62.9 x 49.7 x 35.3 cm"),
                        ("Power Supply", "12VDC to 28VDC, 110/220VAC"),
                    ]),
                    use_cases: strings(&[
                        "Covert surveillance and tracking",
                        "Field intelligence gathering",
                        "High-value asset protection",
                        "Border control operations",
                    ]),
                    benefits: strings(&[
                        "Real-time capture and localization of mobile devices",
                        "Discrete monitoring without network disruption",
                        "Easy-to-deploy portable design",
                        "Enhanced situational awareness",
                    ]),
                    compatible_with: strings(&[
                        "Sentra Route X1",
                        "Sentra Analytics Platform",
                        "Standard tactical communication systems",
                    ]),
                }),
            },
            Product {
                name: "Sentra Route Tactical".into(),
                description: "Compact, ruggedized solution optimized for rapid deployment in \
                    dynamic operational environments, delivering precise location capabilities \
                    and immediate actionable intelligence."
                    .into(),
                slug: Some("sentra-route-tactical".into()),
                image: Some("/images/sentra-route-tactical.jpg".into()),
                badge: badge("Field-Ready", "bg-blue-500"),
                features: strings(&[
                    "Ultra-precise geolocation capabilities",
                    "Rapid deployment under 3 minutes",
                    "Extended operational autonomy",
                    "All-weather, all-terrain functionality",
                    "Secure, encrypted data transmission",
                ]),
                details: Some(ProductDetails {
                    overview: Some(
                        "Sentra Route Tactical is engineered for mobility and reliability in \
                         the most demanding field conditions. Its ruggedized construction, rapid \
                         deployment capability, and advanced location technologies make it the \
                         preferred solution for time-sensitive operations where accuracy and \
                         reliability are paramount."
                            .into(),
                    ),
                    specifications: specs(&[
                        ("Deployment Time", "Under 3 minutes from transport to operational"),
                        ("Location Accuracy", "Within 1.5 meters in optimal conditions"),
                        ("Battery Life", "14+ hours continuous operation"),
                        ("Environmental Rating", "IP68, MIL-STD-810H compliant"),
                        ("Weight", "7.4kg with batteries"),
                        ("Operation Temperature", "-30\u{b0}C to +60\u{b0}C"),
                        ("Connectivity", "Multi-band encrypted communications"),
                        ("User Interface", "Simplified field-optimized controls"),
                    ]),
                    use_cases: strings(&[
                        "Rapid response tactical deployments",
                        "Mobile security operations",
                        "Time-critical field assessments",
                        "Remote site monitoring",
                        "Dynamic security perimeters",
                    ]),
                    benefits: strings(&[
                        "Minimized setup time in critical situations",
                        "Enhanced operational capability in challenging environments",
                        "Reduced equipment footprint for tactical teams",
                        "Seamless integration with existing security frameworks",
                    ]),
                    compatible_with: strings(&[
                        "Sentra Route X1 (as extended node)",
                        "Sentra GeoLock",
                        "Tactical command systems",
                        "Encrypted field communications networks",
                    ]),
                }),
            },
        ],
    }
}

fn sentra_shield() -> ProductCategory {
    ProductCategory {
        name: "Sentra Shield".into(),
        icon: CategoryIcon::Shield,
        description: "Protection and Comprehensive Management".into(),
        color: "from-purple-600 to-purple-800".into(),
        slug: Some("sentra-shield".into()),
        image: Some("/images/sentra-shield-category.jpg".into()),
        tagline: Some("Proactive Defense Solutions".into()),
        products: vec![
            Product {
                name: "Sentra Shield Blocker".into(),
                description: "Advanced selective control system that ensures communication \
                    security in sensitive environments through intelligent monitoring and \
                    targeted intervention."
                    .into(),
                slug: Some("sentra-shield-blocker".into()),
                image: Some("/images/sentra-shield-blocker.jpg".into()),
                badge: badge("Secure Zone", "bg-purple-600"),
                features: strings(&[
                    "Precision-targeted communication control",
                    "Centralized management dashboard",
                    "Real-time threat monitoring and response",
                    "Customizable security policies and protocols",
                    "Regulatory compliance management",
                ]),
                details: Some(ProductDetails {
                    overview: Some(
                        "Sentra Shield Blocker provides sophisticated communication control \
                         capabilities, allowing legitimate activity while preventing unauthorized \
                         access. The system employs advanced filtering algorithms to create secure \
                         environments without disrupting essential communications, making it ideal \
                         for sensitive facilities and protected discussions."
                            .into(),
                    ),
                    specifications: specs(&[
                        ("Coverage Area", "Configurable from 10 to 1500 sq meters"),
                        ("Selectivity", "Individual device/frequency/technology targeting"),
                        ("Management Interface", "Secure web dashboard with role-based access"),
                        ("Power Consumption", "90W typical, 150W peak"),
                        ("Regulatory Compliance", "Available for authorized agencies and use cases"),
                        ("Deployment Options", "Permanent installation or rapid deployment kit"),
                        ("Audit Trail", "Comprehensive logging and reporting"),
                        ("Response Time", "< 50ms from detection to mitigation"),
                    ]),
                    use_cases: strings(&[
                        "Classified meeting environments",
                        "Sensitive research facilities",
                        "Data centers and server rooms",
                        "Executive boardrooms",
                        "Secure government facilities",
                    ]),
                    benefits: strings(&[
                        "Prevention of unauthorized data exfiltration",
                        "Protection against remote electronic eavesdropping",
                        "Customizable security zones within facilities",
                        "Compliance with regulatory security requirements",
                    ]),
                    compatible_with: strings(&[
                        "Existing security infrastructure",
                        "Sentra Analytics for threat intelligence",
                        "Access control systems",
                        "Building management systems",
                    ]),
                }),
            },
            Product {
                name: "Sentra Shield Guardian".into(),
                description: "Comprehensive security platform that integrates digital and \
                    physical protection through AI-driven threat assessment and automated \
                    response protocols."
                    .into(),
                slug: Some("sentra-shield-guardian".into()),
                image: Some("/images/sentra-shield-guardian.jpg".into()),
                badge: badge("Integrated", "bg-purple-500"),
                features: strings(&[
                    "Unified physical and digital security",
                    "AI-powered threat detection and response",
                    "Scalable architecture for any environment",
                    "Predictive analysis and early warning",
                    "Autonomous countermeasure deployment",
                ]),
                details: Some(ProductDetails {
                    overview: Some(
                        "The Guardian system represents a paradigm shift in security, seamlessly \
                         combining physical and digital protection into a unified defense \
                         platform. Using advanced AI algorithms, it continuously monitors for \
                         potential threats and automatically implements appropriate \
                         countermeasures, often neutralizing risks before they materialize."
                            .into(),
                    ),
                    specifications: specs(&[
                        ("Detection Range", "Physical: 300m, Digital: Enterprise-wide"),
                        ("Response Time", "< 200ms from detection to countermeasure"),
                        (
                            "Integration Capability",
                            "All major security systems, CCTV, access control, network security",
                        ),
                        ("Analytics Engine", "Deep learning with behavioral analysis"),
                        ("Scalability", "From single room to multi-site deployment"),
                        ("Threat Database", "Continuously updated via secure channel"),
                        ("Redundancy", "Triple-redundant critical systems"),
                        ("Operational Modes", "Standard, Enhanced, Lockdown"),
                    ]),
                    use_cases: strings(&[
                        "Critical national infrastructure",
                        "Corporate headquarters and campuses",
                        "High-security government installations",
                        "Financial institutions",
                        "Industrial control systems protection",
                    ]),
                    benefits: strings(&[
                        "Dramatic reduction in security incidents through predictive intervention",
                        "Lower operational costs through automation and integration",
                        "Enhanced situational awareness for security personnel",
                        "Adaptable defense posture based on current threat level",
                    ]),
                    compatible_with: strings(&[
                        "All Sentra product ecosystem",
                        "Industry-standard security protocols",
                        "Legacy security systems",
                        "Third-party threat intelligence feeds",
                    ]),
                }),
            },
            Product {
                name: "Sentra GeoLock".into(),
                description: "Next-generation perimeter security solution that combines advanced \
                    geofencing, behavioral analytics, and predictive algorithms to identify \
                    threats before traditional breach occurs."
                    .into(),
                slug: Some("sentra-geolock".into()),
                image: Some("/images/sentra-geolock.jpg".into()),
                badge: badge("Perimeter", "bg-purple-400"),
                features: strings(&[
                    "Multi-layer virtual boundary system",
                    "Behavior-based anomaly detection",
                    "Automated alert escalation",
                    "Integration with physical security systems",
                    "Environmental adaptation algorithms",
                ]),
                details: Some(ProductDetails {
                    overview: Some(
                        "Sentra GeoLock establishes intelligent virtual boundaries with \
                         sophisticated monitoring capabilities. The system goes beyond simple \
                         perimeter alerting by employing behavioral analytics to distinguish \
                         between routine activities and potential threats, dramatically reducing \
                         false alerts while increasing early detection of genuine security \
                         concerns."
                            .into(),
                    ),
                    specifications: specs(&[
                        ("Geofence Precision", "\u{b1}1.0 meter with differential correction"),
                        ("Maximum Perimeter", "Unlimited with distributed node architecture"),
                        ("Alert Channels", "SMS, Email, API, PSIM integration, Mobile App"),
                        ("Analytics Engine", "Machine learning with pattern recognition"),
                        ("False Positive Rate", "< 0.05% with tuned system"),
                        ("Deployment Options", "Fixed, mobile, or hybrid"),
                        ("Weather Compensation", "Automatic adjustment for environmental factors"),
                        ("Power Requirements", "Solar-capable with battery backup"),
                    ]),
                    use_cases: strings(&[
                        "Critical infrastructure perimeters",
                        "Transportation hubs and ports",
                        "Correctional facilities and secure compounds",
                        "Border and boundary monitoring",
                        "Temporary secure zones for events",
                    ]),
                    benefits: strings(&[
                        "Early warning of potential intrusions before physical breach",
                        "Significant reduction in false alarms through intelligent filtering",
                        "Optimized resource allocation through threat prioritization",
                        "Comprehensive situational awareness for security teams",
                    ]),
                    compatible_with: strings(&[
                        "Sentra Route Tactical for mobile deployments",
                        "Sentra Shield Guardian for unified security",
                        "Physical access control systems",
                        "Video surveillance platforms",
                    ]),
                }),
            },
        ],
    }
}

fn sentra_insight() -> ProductCategory {
    ProductCategory {
        name: "Sentra Insight".into(),
        icon: CategoryIcon::Cpu,
        description: "Intelligence and Predictive Analysis".into(),
        color: "from-teal-500 to-teal-700".into(),
        slug: Some("sentra-insight".into()),
        image: Some("/images/sentra-insight-category.jpg".into()),
        tagline: Some("Actionable Intelligence Solutions".into()),
        products: vec![
            Product {
                name: "Sentra Analytics".into(),
                description: "Enterprise intelligence platform that transforms complex data \
                    streams into actionable insights through advanced processing algorithms and \
                    intuitive visualization."
                    .into(),
                slug: Some("sentra-analytics".into()),
                image: Some("/images/sentra-analytics.jpg".into()),
                badge: badge("Strategic", "bg-teal-600"),
                features: strings(&[
                    "Multi-source data fusion and correlation",
                    "Advanced predictive modeling",
                    "Interactive 3D visualization interface",
                    "Automated pattern recognition",
                    "Custom reporting and intelligence briefings",
                ]),
                details: Some(ProductDetails {
                    overview: Some(
                        "Sentra Analytics transforms vast quantities of operational data into \
                         actionable intelligence using sophisticated processing algorithms. The \
                         platform identifies subtle patterns and anomalies that would otherwise \
                         remain hidden, presenting findings through an intuitive visualization \
                         system that enables rapid decision-making and strategic planning."
                            .into(),
                    ),
                    specifications: specs(&[
                        ("Data Processing", "Up to 15TB/day with distributed architecture"),
                        ("Analysis Models", "700+ pre-trained models with custom training options"),
                        (
                            "Visualization Types",
                            "60+ interactive dashboards with custom builder",
                        ),
                        (
                            "Integration",
                            "Universal connector framework for all major data sources",
                        ),
                        ("Deployment", "Cloud, on-premises, air-gapped, or hybrid options"),
                        ("User Roles", "Configurable with granular access controls"),
                        ("Export Formats", "All standard intelligence report formats"),
                        ("Compliance", "Built-in regulatory and security frameworks"),
                    ]),
                    use_cases: strings(&[
                        "Threat intelligence processing and dissemination",
                        "Strategic risk assessment and mitigation planning",
                        "Operational efficiency optimization",
                        "Complex system monitoring and anomaly detection",
                        "Pattern-of-life analysis and behavioral modeling",
                    ]),
                    benefits: strings(&[
                        "Transformation of raw data into actionable intelligence",
                        "Significant time savings in analysis workflows",
                        "Early identification of emerging patterns and threats",
                        "Enhanced decision support for leadership teams",
                    ]),
                    compatible_with: strings(&[
                        "All Sentra products for enhanced intelligence",
                        "Standard intelligence platforms and databases",
                        "Third-party visualization tools",
                        "Custom API integrations for specialized systems",
                    ]),
                }),
            },
            Product {
                name: "Sentra Track & Trace".into(),
                description: "Sophisticated asset monitoring platform that combines real-time \
                    tracking with predictive analytics to deliver unprecedented visibility and \
                    control across operations."
                    .into(),
                slug: Some("sentra-track-trace".into()),
                image: Some("/images/sentra-track-trace.jpg".into()),
                badge: badge("Visibility", "bg-teal-500"),
                features: strings(&[
                    "Multi-modal tracking technologies",
                    "Behavioral prediction algorithms",
                    "Automated workflow integration",
                    "Geo-temporal analysis capabilities",
                    "Custom alerting and notification system",
                ]),
                details: Some(ProductDetails {
                    overview: Some(
                        "Sentra Track & Trace provides unparalleled visibility into the movement \
                         and status of assets, personnel, and information flows. The system \
                         combines precise real-time tracking with advanced predictive modeling to \
                         anticipate future states, enabling proactive management and enhanced \
                         security for all monitored elements."
                            .into(),
                    ),
                    specifications: specs(&[
                        ("Tracking Accuracy", "GPS: \u{b1}1.5m, Indoor: \u{b1}0.3m with beacon network"),
                        (
                            "Prediction Horizon",
                            "Up to 45 minutes with 90% accuracy under standard conditions",
                        ),
                        (
                            "Supported Technologies",
                            "Active/passive RFID, BLE, UWB, GPS, cellular, custom tags",
                        ),
                        (
                            "Mapping Engine",
                            "Real-time 3D with historical playback and future state modeling",
                        ),
                        ("API Support", "REST, GraphQL, MQTT for integrations"),
                        ("Scalability", "From 10 to 100,000+ tracked entities"),
                        ("Geofencing", "Unlimited dynamic zones with behavioral rules"),
                        ("Data Retention", "Configurable with compliance frameworks"),
                    ]),
                    use_cases: strings(&[
                        "Critical asset security and monitoring",
                        "Personnel safety in high-risk environments",
                        "Supply chain integrity verification",
                        "Secure logistics management",
                        "Emergency response resource coordination",
                    ]),
                    benefits: strings(&[
                        "Complete operational visibility across distributed assets",
                        "Proactive risk management through predictive alerts",
                        "Optimized resource allocation based on movement patterns",
                        "Enhanced security through anomalous behavior detection",
                    ]),
                    compatible_with: strings(&[
                        "Sentra Shield ecosystem",
                        "Sentra GeoLock for enhanced perimeter awareness",
                        "Enterprise resource planning systems",
                        "Emergency management platforms",
                    ]),
                }),
            },
            Product {
                name: "Sentra AI Intel".into(),
                description: "Next-generation intelligence platform powered by advanced \
                    artificial intelligence that autonomously processes massive data volumes to \
                    extract critical insights and predictive intelligence."
                    .into(),
                slug: Some("sentra-ai-intel".into()),
                image: Some("/images/sentra-ai-intel.jpg".into()),
                badge: badge("Advanced AI", "bg-teal-400"),
                features: strings(&[
                    "Autonomous multi-source intelligence processing",
                    "Cognitive computing with deep learning",
                    "Continuous self-improvement algorithms",
                    "Natural language processing and generation",
                    "Explainable AI with decision transparency",
                ]),
                details: Some(ProductDetails {
                    overview: Some(
                        "Sentra AI Intel represents our most sophisticated intelligence \
                         platform, leveraging state-of-the-art artificial intelligence to \
                         autonomously process and analyze vast amounts of structured and \
                         unstructured data. The system continuously evolves its capabilities \
                         through machine learning, delivering increasingly valuable insights \
                         while maintaining full transparency in its decision processes."
                            .into(),
                    ),
                    specifications: specs(&[
                        (
                            "AI Architecture",
                            "Hybrid neural networks with knowledge graph integration",
                        ),
                        (
                            "Data Processing",
                            "Structured, unstructured, imagery, signals, multi-language",
                        ),
                        ("Analysis Speed", "Real-time with dynamic prioritization"),
                        (
                            "Learning Capability",
                            "Continuous improvement with supervised validation",
                        ),
                        (
                            "Explainability Framework",
                            "Full transparency with decision path visualization",
                        ),
                        (
                            "Processing Power",
                            "Distributed computing with cloud/edge optimization",
                        ),
                        ("Model Library", "2000+ pre-trained models with domain specificity"),
                        ("Security", "Fully air-gappable with secure processing options"),
                    ]),
                    use_cases: strings(&[
                        "Complex intelligence analysis and synthesis",
                        "Automated threat detection and classification",
                        "Pattern recognition in massive datasets",
                        "Predictive operational planning",
                        "Strategic decision support for leadership",
                    ]),
                    benefits: strings(&[
                        "Dramatic reduction in analysis time for complex intelligence",
                        "Discovery of non-obvious connections and patterns",
                        "Enhanced decision quality through comprehensive analysis",
                        "Consistent processing methodology with transparent reasoning",
                    ]),
                    compatible_with: strings(&[
                        "Entire Sentra ecosystem",
                        "Standard intelligence platforms",
                        "Custom data sources and specialized sensors",
                        "Human analyst workflows and methodologies",
                    ]),
                }),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = Catalog::get();
        assert_eq!(catalog.categories().len(), 3);
        for category in catalog.categories() {
            assert_eq!(category.products.len(), 3);
        }
    }

    #[test]
    fn test_category_lookup_by_slug() {
        let catalog = Catalog::get();
        let (index, shield) = catalog.category_by_slug("sentra-shield").unwrap();
        assert_eq!(index, 1);
        assert_eq!(shield.name, "Sentra Shield");
        assert!(catalog.category_by_slug("sentra-void").is_none());
    }

    #[test]
    fn test_product_lookup_within_category() {
        let catalog = Catalog::get();
        let geolock = catalog.find_product(1, "sentra-geolock").unwrap();
        assert_eq!(geolock.name, "Sentra GeoLock");
        // GeoLock is a Shield product, not a Route product
        assert!(catalog.find_product(0, "sentra-geolock").is_none());
    }

    #[test]
    fn test_product_lookup_anywhere() {
        let catalog = Catalog::get();
        let (category, product) = catalog.find_product_anywhere("sentra-ai-intel").unwrap();
        assert_eq!(category.name, "Sentra Insight");
        assert_eq!(product.name, "Sentra AI Intel");
    }

    #[test]
    fn test_require_product_reports_unknown_slug() {
        let catalog = Catalog::get();
        let err = catalog.require_product("sentra-unknown").unwrap_err();
        assert_eq!(format!("{}", err), "Product not found: sentra-unknown");
    }

    #[test]
    fn test_featured_takes_first_of_each_category() {
        let catalog = Catalog::get();
        let featured: Vec<&str> = catalog
            .featured()
            .iter()
            .map(|(_, p)| p.name.as_str())
            .collect();
        assert_eq!(
            featured,
            vec!["Sentra Route X1", "Sentra Shield Blocker", "Sentra Analytics"]
        );
    }

    #[test]
    fn test_every_product_has_details_and_badge() {
        let catalog = Catalog::get();
        for category in catalog.categories() {
            for product in &category.products {
                assert!(product.details.is_some(), "{} has no details", product.name);
                assert!(product.badge.is_some(), "{} has no badge", product.name);
                assert!(!product.features.is_empty());
            }
        }
    }
}

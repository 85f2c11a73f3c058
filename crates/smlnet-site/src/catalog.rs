//! All site copy in English and Dutch, organized by section so text can
//! be found and updated without touching behavior. Every entry is a
//! static [`BilingualText`]; resolution and fallback live in the i18n
//! layer.

use smlnet_core::i18n::BilingualText;

pub mod nav {
    use super::*;

    pub static HOME: BilingualText = BilingualText::pair("Home", "Home");
    pub static SERVICES: BilingualText = BilingualText::pair("Services", "Diensten");
    pub static ABOUT: BilingualText = BilingualText::pair("About", "Over Ons");
    pub static CONTACT: BilingualText = BilingualText::pair("Contact", "Contact");
    pub static CONTACT_CTA: BilingualText = BilingualText::pair("Get In Touch", "Neem Contact Op");
}

pub mod hero {
    use super::*;

    pub static HEADING_1: BilingualText = BilingualText::pair("We Build", "Wij Bouwen");
    pub static HEADING_2: BilingualText = BilingualText::pair("Your Website", "Jouw Website");
    pub static DESCRIPTION: BilingualText = BilingualText::pair(
        "SMLnet is a web development agency based in Rotterdam, the Netherlands, crafting stunning, high-performance websites for businesses everywhere.",
        "SMLnet is een webontwikkelingsbureau gevestigd in Rotterdam, Nederland. Wij bouwen prachtige, snelle websites voor bedrijven overal ter wereld.",
    );
    pub static CTA: BilingualText = BilingualText::pair("Start Your Project", "Start Jouw Project");
    pub static VIEW_SERVICES: BilingualText =
        BilingualText::pair("View Our Services", "Bekijk Onze Diensten");
}

pub mod services {
    use super::*;

    pub static LABEL: BilingualText = BilingualText::pair("What We Do", "Wat Wij Doen");
    pub static TITLE: BilingualText = BilingualText::pair("Our Services", "Onze Diensten");
    pub static SUBTITLE: BilingualText = BilingualText::pair(
        "We build, host, and maintain your website — that's what we do best.",
        "Wij bouwen, hosten en onderhouden jouw website — dat is wat wij het beste doen.",
    );

    pub static DEVELOPMENT_TITLE: BilingualText =
        BilingualText::pair("Website Development", "Website Ontwikkeling");
    pub static DEVELOPMENT_DESC: BilingualText = BilingualText::pair(
        "We design and build custom, high-performance websites tailored to your business — from concept to launch.",
        "Wij ontwerpen en bouwen op maat gemaakte, snelle websites voor jouw bedrijf — van concept tot lancering.",
    );

    pub static HOSTING_TITLE: BilingualText = BilingualText::pair("Web Hosting", "Webhosting");
    pub static HOSTING_DESC: BilingualText = BilingualText::pair(
        "Reliable, secure hosting that keeps your website online 24/7 with fast load times and enterprise-grade infrastructure.",
        "Betrouwbare, veilige hosting die jouw website 24/7 online houdt met snelle laadtijden en professionele infrastructuur.",
    );

    pub static MAINTENANCE_TITLE: BilingualText =
        BilingualText::pair("Maintenance & Support", "Onderhoud & Support");
    pub static MAINTENANCE_DESC: BilingualText = BilingualText::pair(
        "Ongoing updates, security patches, and technical support to keep your site running smoothly at all times.",
        "Doorlopende updates, beveiligingspatches en technische ondersteuning om jouw website altijd soepel te laten draaien.",
    );
}

pub mod about {
    use super::*;

    pub static LABEL: BilingualText = BilingualText::pair("About Us", "Over Ons");
    pub static HEADING: BilingualText = BilingualText::pair("We're", "Wij Zijn");
    pub static DESCRIPTION: BilingualText = BilingualText::pair(
        "We're a passionate team of developers and designers based in Rotterdam, the Netherlands, building world-class websites for companies worldwide. We believe every business deserves a powerful online presence — one that's fast, beautiful, and built to grow.",
        "Wij zijn een gepassioneerd team van ontwikkelaars en ontwerpers gevestigd in Rotterdam, Nederland. Wij bouwen websites van wereldklasse voor bedrijven wereldwijd. Wij geloven dat elk bedrijf een krachtige online aanwezigheid verdient — snel, mooi en gebouwd om te groeien.",
    );
}

pub mod contact {
    use super::*;

    pub static LABEL: BilingualText = BilingualText::pair("Get In Touch", "Neem Contact Op");
    pub static TITLE: BilingualText =
        BilingualText::pair("Let's Work Together", "Laten We Samenwerken");
    pub static SUBTITLE: BilingualText = BilingualText::pair(
        "Tell us about your project. No data is stored — your message goes directly to our inbox.",
        "Vertel ons over jouw project. Er worden geen gegevens opgeslagen — je bericht gaat direct naar onze inbox.",
    );

    pub static NAME: BilingualText = BilingualText::pair("Name", "Naam");
    pub static EMAIL: BilingualText = BilingualText::pair("Email", "E-mail");
    pub static PHONE: BilingualText = BilingualText::pair("Phone", "Telefoon");
    pub static SERVICE: BilingualText = BilingualText::pair("Service", "Dienst");
    pub static SELECT_SERVICE: BilingualText =
        BilingualText::pair("Select a service", "Selecteer een dienst");
    pub static MESSAGE: BilingualText = BilingualText::pair("Message", "Bericht");
    pub static SEND: BilingualText = BilingualText::pair("Send Message", "Verstuur Bericht");

    pub static SERVICE_WEB_DEVELOPMENT: BilingualText =
        BilingualText::pair("Web Development", "Website Ontwikkeling");
    pub static SERVICE_WEB_HOSTING: BilingualText =
        BilingualText::pair("Web Hosting", "Webhosting");
    pub static SERVICE_MAINTENANCE: BilingualText =
        BilingualText::pair("Maintenance & Support", "Onderhoud & Support");
    pub static SERVICE_OTHER: BilingualText = BilingualText::pair("Other", "Anders");

    pub static PRIVACY: BilingualText = BilingualText::pair(
        "Opens your email client — we never store your data",
        "Opent je e-mailclient — wij slaan nooit gegevens op",
    );
    pub static ERROR_FIELDS: BilingualText = BilingualText::pair(
        "Please fill in all required fields.",
        "Vul alstublieft alle verplichte velden in.",
    );
    pub static SUCCESS: BilingualText = BilingualText::pair(
        "Your email client has been opened. Send the email to reach us!",
        "Je e-mailclient is geopend. Verstuur de e-mail om ons te bereiken!",
    );
}

pub mod pricing {
    use super::*;

    pub static LABEL: BilingualText = BilingualText::pair("Pricing", "Prijzen");
    pub static TITLE: BilingualText =
        BilingualText::pair("Transparent Pricing", "Transparante Prijzen");
    pub static SUBTITLE: BilingualText = BilingualText::pair(
        "Every website is unique — and so is the price. Our pricing depends on your specific needs and requirements.",
        "Elke website is uniek — en de prijs ook. Onze prijzen zijn afhankelijk van jouw specifieke wensen en eisen.",
    );

    pub static COMPLEXITY_TITLE: BilingualText =
        BilingualText::pair("Website Complexity", "Website Complexiteit");
    pub static COMPLEXITY_DESC: BilingualText = BilingualText::pair(
        "The design, layout, number of pages, and functionality all influence the final price.",
        "Het ontwerp, de lay-out, het aantal pagina's en de functionaliteit bepalen mede de uiteindelijke prijs.",
    );

    pub static VISITORS_TITLE: BilingualText =
        BilingualText::pair("Expected Visitors", "Verwachte Bezoekers");
    pub static VISITORS_DESC: BilingualText = BilingualText::pair(
        "Higher traffic requires more robust hosting infrastructure, which affects monthly costs.",
        "Meer verkeer vereist een robuustere hostinginfrastructuur, wat de maandelijkse kosten beïnvloedt.",
    );

    pub static STORAGE_TITLE: BilingualText = BilingualText::pair("Data & Storage", "Data & Opslag");
    pub static STORAGE_DESC: BilingualText = BilingualText::pair(
        "The amount of data storage, media files, and databases your website needs impacts pricing.",
        "De hoeveelheid dataopslag, mediabestanden en databases die je website nodig heeft, beïnvloedt de prijs.",
    );

    pub static MAINTENANCE_TITLE: BilingualText =
        BilingualText::pair("Maintenance Level", "Onderhoudsniveau");
    pub static MAINTENANCE_DESC: BilingualText = BilingualText::pair(
        "Ongoing updates, security monitoring, and support packages vary based on your needs.",
        "Doorlopende updates, beveiligingsmonitoring en supportpakketten variëren op basis van jouw behoeften.",
    );

    pub static CTA: BilingualText = BilingualText::pair(
        "Want to know what your website will cost? Contact us for a free, no-obligation estimate.",
        "Wil je weten wat jouw website gaat kosten? Neem contact met ons op voor een gratis, vrijblijvende offerte.",
    );
    pub static CTA_EMAIL: BilingualText =
        BilingualText::pair("Get a Free Estimate", "Vraag een Gratis Offerte Aan");
    pub static CTA_PHONE: BilingualText = BilingualText::pair("Or Call Us", "Of Bel Ons");
}

pub mod footer {
    use super::*;

    pub static TAGLINE: BilingualText = BilingualText::pair(
        "Building the web, worldwide.",
        "Websites bouwen, wereldwijd.",
    );
    pub static SERVICES: BilingualText = BilingualText::pair("Services", "Diensten");
    pub static ABOUT: BilingualText = BilingualText::pair("About", "Over Ons");
    pub static CONTACT: BilingualText = BilingualText::pair("Contact", "Contact");
    pub static PRICING: BilingualText = BilingualText::pair("Pricing", "Prijzen");
    pub static COOKIE_POLICY: BilingualText =
        BilingualText::pair("Cookie Policy", "Cookiebeleid");
    pub static PRIVACY_POLICY: BilingualText =
        BilingualText::pair("Privacy Policy", "Privacyverklaring");
    /// The footer link that reopens the consent preferences panel.
    pub static COOKIE_SETTINGS: BilingualText =
        BilingualText::pair("Cookie settings", "Cookie-instellingen");
}

pub mod banner {
    use super::*;

    pub static TITLE: BilingualText = BilingualText::pair("Cookie preferences", "Cookievoorkeuren");
    pub static DESCRIPTION: BilingualText = BilingualText::pair(
        "We use cookies to ensure our website functions properly and, with your consent, to analyse usage and support marketing purposes. You can adjust your preferences at any time.",
        "Wij gebruiken cookies om onze website goed te laten functioneren en, indien u toestemming geeft, om het gebruik te analyseren en marketingdoeleinden te ondersteunen. U kunt uw voorkeuren op elk moment aanpassen.",
    );

    pub static ACCEPT_ALL: BilingualText = BilingualText::pair("Accept all", "Accepteer alles");
    pub static REJECT_ALL: BilingualText = BilingualText::pair("Reject all", "Weiger alles");
    pub static CUSTOMIZE: BilingualText =
        BilingualText::pair("Customise", "Voorkeuren aanpassen");
    pub static SAVE_PREFERENCES: BilingualText =
        BilingualText::pair("Save preferences", "Voorkeuren opslaan");

    pub static FUNCTIONAL: BilingualText = BilingualText::pair("Functional", "Functioneel");
    pub static FUNCTIONAL_DESC: BilingualText = BilingualText::pair(
        "Required for the website to work properly (e.g. language preference).",
        "Noodzakelijk voor de goede werking van de website (bijv. taalvoorkeur).",
    );
    pub static ALWAYS_ACTIVE: BilingualText = BilingualText::pair("Always active", "Altijd actief");

    pub static ANALYTICAL: BilingualText = BilingualText::pair("Analytical", "Analytisch");
    pub static ANALYTICAL_DESC: BilingualText = BilingualText::pair(
        "Help us understand how visitors use our website.",
        "Helpen ons te begrijpen hoe bezoekers onze website gebruiken.",
    );

    pub static MARKETING: BilingualText = BilingualText::pair("Marketing", "Marketing");
    pub static MARKETING_DESC: BilingualText = BilingualText::pair(
        "Used to display relevant advertisements.",
        "Worden gebruikt om relevante advertenties te tonen.",
    );
}

pub mod legal {
    use super::*;

    pub static COOKIE_POLICY_TITLE: BilingualText =
        BilingualText::pair("Cookie Policy", "Cookiebeleid");
    pub static COOKIE_POLICY_INTRO: BilingualText = BilingualText::pair(
        "SMLnet respects your privacy. This page explains how we handle cookies on our website.",
        "SMLnet respecteert uw privacy. Op deze pagina leggen wij uit hoe wij omgaan met cookies op onze website.",
    );

    pub static PRIVACY_POLICY_TITLE: BilingualText =
        BilingualText::pair("Privacy Policy", "Privacyverklaring");
    pub static PRIVACY_POLICY_INTRO: BilingualText = BilingualText::pair(
        "SMLnet takes your privacy seriously. This privacy policy explains what data we collect (spoiler: almost nothing) and how we handle it.",
        "SMLnet neemt uw privacy serieus. Deze privacyverklaring legt uit welke gegevens wij verzamelen (spoiler: bijna niets) en hoe wij daarmee omgaan.",
    );
}

pub mod not_found {
    use super::*;

    pub static TITLE: BilingualText = BilingualText::pair("Page not found", "Pagina niet gevonden");
    pub static DESCRIPTION: BilingualText = BilingualText::pair(
        "The page you are looking for does not exist or has been moved.",
        "De pagina die je zoekt bestaat niet of is verplaatst.",
    );
    pub static BACK_HOME: BilingualText = BilingualText::pair("Back to home", "Terug naar home");
}

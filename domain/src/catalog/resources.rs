use crate::core::language::LocalizedText;
use crate::resource::record::{ContactInfo, ResourceCategory, ResourceRecord};

/// Orange County service area of the county Office on Aging
const OC_POSTAL_CODES: &[&str] = &[
    "92602", "92603", "92604", "92606", "92610", "92612", "92614", "92617", "92618", "92620",
    "92624", "92625", "92626", "92627", "92629", "92630", "92637", "92646", "92647", "92648",
    "92649", "92651", "92653", "92655", "92656", "92657", "92660", "92661", "92662", "92663",
    "92672", "92673", "92675", "92676", "92677", "92678", "92679", "92683", "92688", "92691",
    "92692", "92694", "92701", "92703", "92704", "92705", "92706", "92707", "92708", "92780",
    "92782", "92801", "92802", "92804", "92805", "92806", "92807", "92808", "92821", "92823",
    "92831", "92832", "92833", "92835", "92840", "92841", "92843", "92844", "92845", "92861",
    "92865", "92866", "92867", "92868", "92869", "92870", "92886", "92887",
];

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|c| c.to_string()).collect()
}

/// Resource directory, in display order
pub fn resources() -> Vec<ResourceRecord> {
    vec![
        ResourceRecord {
            id: "oc_office_aging".to_string(),
            name: "OC Office on Aging".to_string(),
            category: ResourceCategory::Support,
            description: LocalizedText::new(
                "The primary government agency for senior services in Orange County. Call for referrals.",
                "La agencia gubernamental principal para servicios para personas mayores en el Condado de Orange. Llame para referencias.",
            ),
            contact: ContactInfo::default()
                .phone("800-510-2020")
                .website("https://www.officeonaging.ocgov.com"),
            postal_codes: codes(OC_POSTAL_CODES),
            verified: true,
        },
        ResourceRecord {
            id: "habitat_oc".to_string(),
            name: "Habitat for Humanity OC - Home Repair".to_string(),
            category: ResourceCategory::Funding,
            description: LocalizedText::new(
                "Offers low-cost home repairs and modifications for qualified low-income seniors.",
                "Ofrece reparaciones y modificaciones del hogar a bajo costo para personas mayores de bajos ingresos calificadas.",
            ),
            contact: ContactInfo::default()
                .phone("714-434-6200")
                .website("https://www.habitatoc.org"),
            // Partial service area
            postal_codes: codes(&["92701", "92703", "92801", "92802", "92804", "92805"]),
            verified: true,
        },
        ResourceRecord {
            id: "council_aging".to_string(),
            name: "Council on Aging - Southern California".to_string(),
            category: ResourceCategory::Support,
            description: LocalizedText::new(
                "Provides unbiased information, programs, and services to older adults.",
                "Proporciona información imparcial, programas y servicios a adultos mayores.",
            ),
            contact: ContactInfo::default()
                .phone("714-479-0107")
                .website("https://www.coasc.org"),
            // Partial service area
            postal_codes: codes(&["92602", "92603", "92604", "92606"]),
            verified: true,
        },
        ResourceRecord {
            id: "safe_bath_pros".to_string(),
            name: "Safe Bath Pros (Demo Contractor)".to_string(),
            category: ResourceCategory::Contractor,
            description: LocalizedText::new(
                "Specializes in walk-in tubs and barrier-free showers. CAPS certified.",
                "Se especializa en bañeras de acceso y duchas sin barreras. Certificado CAPS.",
            ),
            contact: ContactInfo::default()
                .phone("555-012-3456")
                .email("contact@safebathpros.demo"),
            postal_codes: codes(&["92626", "92627", "92646", "92647", "92648"]),
            verified: true,
        },
    ]
}

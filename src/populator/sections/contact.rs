//! Contact info blocks: name, address, email, phone.
//!
//! Each block is rendered only when its field is present. The address joins
//! department, building, street, city and (if given) university on separate
//! lines.

use crate::document::{present, Address, Contact};
use crate::populator::regions;
use crate::populator::utils::escape;
use crate::populator::Fragment;

pub fn render(contact: Option<&Contact>) -> Vec<Fragment> {
    let Some(contact) = contact else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    if let Some(name) = present(&contact.name) {
        blocks.push(info_block("Contact", &escape(name)));
    }
    if let Some(address) = &contact.address {
        let lines = address_lines(address);
        if !lines.is_empty() {
            let body = lines.iter().map(|l| escape(l)).collect::<Vec<_>>().join("<br>\n");
            blocks.push(info_block("Address", &body));
        }
    }
    if let Some(email) = present(&contact.email) {
        let email = escape(email.trim());
        blocks.push(info_block(
            "Email",
            &format!("<a href=\"mailto:{}\">{}</a>", email, email),
        ));
    }
    if let Some(phone) = present(&contact.phone) {
        blocks.push(info_block("Phone", &escape(phone.trim())));
    }

    if blocks.is_empty() {
        return Vec::new();
    }
    vec![Fragment::new(regions::CONTACT_INFO, blocks.concat())]
}

/// Address lines in display order, blank parts dropped.
pub fn address_lines(address: &Address) -> Vec<&str> {
    [
        Some(address.department.as_str()),
        Some(address.building.as_str()),
        Some(address.street.as_str()),
        Some(address.city.as_str()),
        address.university.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .collect()
}

fn info_block(heading: &str, body: &str) -> String {
    format!(
        "<div class=\"info-item\">\n<h3>{}</h3>\n<p>{}</p>\n</div>\n",
        heading, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SiteDocument;

    fn contact(json: &str) -> Contact {
        SiteDocument::from_json(json).unwrap().contact.unwrap()
    }

    #[test]
    fn test_all_blocks_in_order() {
        let c = contact(
            r#"{"contact": {
                "name": "Vision Lab",
                "email": "  lab@uni.example \n",
                "phone": "+1 555 0100",
                "address": {"department": "Dept. of CS", "building": "Hall 3",
                            "street": "1 Main St", "city": "Springfield", "university": "State U"}
            }}"#,
        );
        let html = &render(Some(&c))[0].html;
        let order = ["<h3>Contact</h3>", "<h3>Address</h3>", "<h3>Email</h3>", "<h3>Phone</h3>"];
        let positions: Vec<usize> = order.iter().map(|h| html.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(html.contains("<a href=\"mailto:lab@uni.example\">lab@uni.example</a>"));
        assert!(html.contains("Dept. of CS<br>\nHall 3<br>\n1 Main St<br>\nSpringfield<br>\nState U"));
    }

    #[test]
    fn test_blocks_are_conditional() {
        let c = contact(r#"{"contact": {"phone": "123"}}"#);
        let html = &render(Some(&c))[0].html;
        assert_eq!(html.matches("info-item").count(), 1);
        assert!(!html.contains("Address"));
    }

    #[test]
    fn test_address_without_university() {
        let c = contact(
            r#"{"contact": {"address": {"department": "D", "building": "B", "street": "S", "city": "C"}}}"#,
        );
        assert_eq!(address_lines(c.address.as_ref().unwrap()), vec!["D", "B", "S", "C"]);
    }

    #[test]
    fn test_contact_with_only_map_leaves_region() {
        let c = contact(r#"{"contact": {"map": {"latitude": 1.0, "longitude": 2.0}}}"#);
        assert!(render(Some(&c)).is_empty());
    }
}

//! Category matching for listing text.
//!
//! Two tiers: a curated keyword table scanned in order, then fuzzy
//! matching over subcategory and leaf names. The keyword table maps
//! merchandising vocabulary ("credenza", "oushak", "cigar store") onto
//! category pairs, and may name a finer pair than the live catalog
//! carries as its own row; such pairs are suggested as-is.

use curio_core::catalog::{self, Category};
use curio_core::defaults::CATEGORY_FUZZY_THRESHOLD;
use curio_core::models::CategoryMatch;

use crate::similarity::similarity;

/// Keyword to category-pair table, scanned top to bottom with the first
/// substring hit winning. Order is load-bearing: compound keywords come
/// before the generic terms that would shadow them ("persian rug" and
/// "oriental rug" before "rug").
const CATEGORY_KEYWORDS: &[(&str, &str, &str)] = &[
    ("coffee table", "Furniture", "Coffee Tables"),
    ("dining table", "Furniture", "Dining Tables"),
    ("side table", "Tables", "Side Tables"),
    ("end table", "Furniture", "Side Tables"),
    ("console", "Furniture", "Console Tables"),
    ("desk", "Furniture", "Desks"),
    ("cabinet", "Furniture", "Cabinets"),
    ("bookcase", "Furniture", "Bookcases"),
    ("bookshelf", "Furniture", "Bookcases"),
    ("dresser", "Furniture", "Dressers"),
    ("chest of drawers", "Furniture", "Dressers"),
    ("bed", "Furniture", "Beds"),
    ("headboard", "Furniture", "Beds"),
    ("sofa", "Seating", "Sofas"),
    ("couch", "Seating", "Sofas"),
    ("sectional", "Seating", "Sofas"),
    ("loveseat", "Seating", "Sofas"),
    ("armchair", "Seating", "Armchairs"),
    ("lounge chair", "Seating", "Armchairs"),
    ("club chair", "Seating", "Armchairs"),
    ("dining chair", "Seating", "Dining Chairs"),
    ("side chair", "Seating", "Dining Chairs"),
    ("stool", "Seating", "Stools"),
    ("bar stool", "Seating", "Stools"),
    ("bench", "Seating", "Benches"),
    ("ottoman", "Seating", "Stools"),
    ("chandelier", "Lighting", "Chandeliers and Pendants"),
    ("pendant", "Lighting", "Chandeliers and Pendants"),
    ("floor lamp", "Lighting", "Floor Lamps"),
    ("table lamp", "Lighting", "Table Lamps"),
    ("desk lamp", "Lighting", "Table Lamps"),
    ("sconce", "Lighting", "Wall Lights and Sconces"),
    ("wall light", "Lighting", "Wall Lights and Sconces"),
    ("lantern", "Lighting", "Lanterns"),
    ("flush mount", "Lighting", "Flush Mount"),
    ("ceiling light", "Lighting", "Flush Mount"),
    ("vase", "Decorative Objects", "Vases and Vessels"),
    ("urn", "Decorative Objects", "Vases and Vessels"),
    ("sculpture", "Decorative Objects", "Sculptures"),
    ("bust", "Decorative Objects", "Sculptures"),
    ("clock", "Decorative Objects", "Clocks"),
    ("mirror", "Mirrors", "Wall Mirrors"),
    ("wall mirror", "Mirrors", "Wall Mirrors"),
    ("floor mirror", "Mirrors", "Floor Mirrors"),
    ("cheval mirror", "Mirrors", "Floor Mirrors"),
    ("overmantel", "Mirrors", "Overmantel Mirrors"),
    ("convex mirror", "Mirrors", "Convex Mirrors"),
    ("trumeau", "Mirrors", "Trumeau Mirrors"),
    ("pier mirror", "Mirrors", "Pier Mirrors"),
    ("sunburst mirror", "Mirrors", "Sunburst Mirrors"),
    ("frame", "Decorative Objects", "Picture Frames"),
    ("candle holder", "Decorative Objects", "Candle Holders"),
    ("candelabra", "Decorative Objects", "Candle Holders"),
    ("bowl", "Decorative Objects", "Bowls and Baskets"),
    ("basket", "Decorative Objects", "Bowls and Baskets"),
    ("tray", "Decorative Objects", "Bowls and Baskets"),
    ("box", "Decorative Objects", "Boxes"),
    ("vanity", "Tables", "Vanities"),
    ("dressing table", "Tables", "Vanities"),
    // Asian Art and Furniture
    ("tansu", "Asian Art and Furniture", "Japanese Furniture"),
    ("shoji", "Asian Art and Furniture", "Screens and Room Dividers"),
    ("coromandel", "Asian Art and Furniture", "Screens and Room Dividers"),
    ("ming", "Asian Art and Furniture", "Chinese Furniture"),
    ("qing", "Asian Art and Furniture", "Chinese Furniture"),
    ("chinese furniture", "Asian Art and Furniture", "Chinese Furniture"),
    ("japanese furniture", "Asian Art and Furniture", "Japanese Furniture"),
    ("korean furniture", "Asian Art and Furniture", "Korean Furniture"),
    ("asian ceramic", "Asian Art and Furniture", "Asian Ceramics"),
    ("celadon", "Asian Art and Furniture", "Asian Ceramics"),
    ("imari", "Asian Art and Furniture", "Asian Ceramics"),
    // Building and Garden Elements
    ("mantel", "Building and Garden Elements", "Fireplace Elements"),
    ("fireplace", "Building and Garden Elements", "Fireplace Elements"),
    ("andiron", "Building and Garden Elements", "Fireplace Elements"),
    ("garden statue", "Building and Garden Elements", "Garden Ornaments"),
    ("sundial", "Building and Garden Elements", "Garden Ornaments"),
    ("fountain", "Building and Garden Elements", "Fountains and Planters"),
    ("planter", "Building and Garden Elements", "Fountains and Planters"),
    ("architectural", "Building and Garden Elements", "Architectural Fragments"),
    ("stained glass", "Building and Garden Elements", "Windows and Shutters"),
    ("iron gate", "Building and Garden Elements", "Doors and Gates"),
    // Case Pieces and Storage Cabinets
    ("armoire", "Case Pieces and Storage Cabinets", "Armoires and Wardrobes"),
    ("wardrobe", "Case Pieces and Storage Cabinets", "Armoires and Wardrobes"),
    ("buffet", "Case Pieces and Storage Cabinets", "Buffets and Sideboards"),
    ("sideboard", "Case Pieces and Storage Cabinets", "Buffets and Sideboards"),
    ("credenza", "Case Pieces and Storage Cabinets", "Buffets and Sideboards"),
    ("chest", "Case Pieces and Storage Cabinets", "Chests and Trunks"),
    ("trunk", "Case Pieces and Storage Cabinets", "Chests and Trunks"),
    ("commode", "Case Pieces and Storage Cabinets", "Commodes"),
    ("secretary", "Case Pieces and Storage Cabinets", "Secretaries and Desks"),
    ("vitrine", "Case Pieces and Storage Cabinets", "Vitrines and Display Cabinets"),
    ("curio", "Case Pieces and Storage Cabinets", "Vitrines and Display Cabinets"),
    ("china cabinet", "Case Pieces and Storage Cabinets", "Vitrines and Display Cabinets"),
    ("highboy", "Case Pieces and Storage Cabinets", "Highboys and Lowboys"),
    ("lowboy", "Case Pieces and Storage Cabinets", "Highboys and Lowboys"),
    // Folk Art
    ("weathervane", "Folk Art", "Weathervanes and Whirligigs"),
    ("whirligig", "Folk Art", "Weathervanes and Whirligigs"),
    ("decoy", "Folk Art", "Decoys"),
    ("duck decoy", "Folk Art", "Decoys"),
    ("trade sign", "Folk Art", "Trade Signs and Figures"),
    ("cigar store", "Folk Art", "Trade Signs and Figures"),
    ("quilt", "Folk Art", "Textiles and Quilts"),
    ("hooked rug", "Folk Art", "Textiles and Quilts"),
    ("sampler", "Folk Art", "Textiles and Quilts"),
    ("redware", "Folk Art", "Pottery and Ceramics"),
    ("stoneware", "Folk Art", "Pottery and Ceramics"),
    // More Furniture and Collectibles
    ("bar cart", "More Furniture and Collectibles", "Bar Carts and Bars"),
    ("dry bar", "More Furniture and Collectibles", "Bar Carts and Bars"),
    ("plant stand", "More Furniture and Collectibles", "Pedestals and Plant Stands"),
    ("pedestal", "More Furniture and Collectibles", "Pedestals and Plant Stands"),
    ("hall tree", "More Furniture and Collectibles", "Coat Racks and Hall Trees"),
    ("coat rack", "More Furniture and Collectibles", "Coat Racks and Hall Trees"),
    ("etagere", "More Furniture and Collectibles", "Etageres and Shelving"),
    ("room divider", "More Furniture and Collectibles", "Room Dividers"),
    ("folding screen", "More Furniture and Collectibles", "Room Dividers"),
    // Rugs and Carpets
    ("persian rug", "Rugs and Carpets", "Persian Rugs"),
    ("oriental rug", "Rugs and Carpets", "Oriental Rugs"),
    ("turkish rug", "Rugs and Carpets", "Turkish Rugs"),
    ("oushak", "Rugs and Carpets", "Turkish Rugs"),
    ("moroccan rug", "Rugs and Carpets", "Moroccan Rugs"),
    ("kilim", "Rugs and Carpets", "Kilims and Flatweaves"),
    ("dhurrie", "Rugs and Carpets", "Kilims and Flatweaves"),
    ("runner", "Rugs and Carpets", "Runners"),
    ("tapestry", "Rugs and Carpets", "Tapestries"),
    ("aubusson", "Rugs and Carpets", "Tapestries"),
    ("rug", "Rugs and Carpets", "Contemporary Rugs"),
    ("carpet", "Rugs and Carpets", "Contemporary Rugs"),
    // Serveware, Ceramics, Silver and Glass
    ("flatware", "Serveware, Ceramics, Silver and Glass", "Flatware and Cutlery"),
    ("silverware", "Serveware, Ceramics, Silver and Glass", "Flatware and Cutlery"),
    ("hollowware", "Serveware, Ceramics, Silver and Glass", "Hollowware"),
    ("tea service", "Serveware, Ceramics, Silver and Glass", "Tea and Coffee Sets"),
    ("tea set", "Serveware, Ceramics, Silver and Glass", "Tea and Coffee Sets"),
    ("coffee set", "Serveware, Ceramics, Silver and Glass", "Tea and Coffee Sets"),
    ("porcelain", "Serveware, Ceramics, Silver and Glass", "Porcelain and China"),
    ("china", "Serveware, Ceramics, Silver and Glass", "Porcelain and China"),
    ("dinnerware", "Serveware, Ceramics, Silver and Glass", "Porcelain and China"),
    ("murano", "Serveware, Ceramics, Silver and Glass", "Art Glass"),
    ("art glass", "Serveware, Ceramics, Silver and Glass", "Art Glass"),
    ("decanter", "Serveware, Ceramics, Silver and Glass", "Barware"),
    ("barware", "Serveware, Ceramics, Silver and Glass", "Barware"),
    ("crystal", "Serveware, Ceramics, Silver and Glass", "Crystal"),
    ("stemware", "Serveware, Ceramics, Silver and Glass", "Crystal"),
    ("tureen", "Serveware, Ceramics, Silver and Glass", "Serving Pieces"),
    ("platter", "Serveware, Ceramics, Silver and Glass", "Serving Pieces"),
];

/// Find the category suggested by `input`.
///
/// Keyword hits take priority; a hit that names a live catalog row
/// returns that row's pair, and any other hit is suggested verbatim.
/// Without a keyword hit, every subcategory and leaf name is scored
/// fuzzily and the best row at or above the threshold wins, with a leaf
/// hit resolving to its parent pair.
pub fn find_matching_category(input: &str) -> Option<CategoryMatch> {
    if input.is_empty() {
        return None;
    }

    let input_lower = input.to_lowercase();

    for (keyword, l1, l2) in CATEGORY_KEYWORDS {
        if input_lower.contains(keyword) {
            if let Some(cat) = catalog::find_category(l1, l2) {
                return Some(CategoryMatch::new(cat.l1, cat.l2));
            }
            return Some(CategoryMatch::new(*l1, *l2));
        }
    }

    let mut best_match: Option<&Category> = None;
    let mut best_score = 0.0;

    for cat in catalog::CATEGORIES {
        let l2_score = similarity(input, cat.l2);
        if l2_score > best_score && l2_score >= CATEGORY_FUZZY_THRESHOLD {
            best_score = l2_score;
            best_match = Some(cat);
        }

        for sub in cat.l3 {
            let sub_score = similarity(input, sub);
            if sub_score > best_score && sub_score >= CATEGORY_FUZZY_THRESHOLD {
                best_score = sub_score;
                best_match = Some(cat);
            }
        }
    }

    best_match.map(|cat| CategoryMatch::new(cat.l1, cat.l2))
}

//! Reference catalogs for listing attributes.
//!
//! Canonical option sets for categories, materials, styles, periods, and
//! the other enumerated listing fields. These tables are the single source
//! of truth for what a matcher may return: every enumerated suggestion is
//! either an exact entry from one of them or absent.
//!
//! Ordering is meaningful. Matchers that scan a table return hits in table
//! order, and the period list is consumed front-first when building the
//! model prompt.

/// A category tree row: top level, subcategory, and leaf names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub l1: &'static str,
    pub l2: &'static str,
    pub l3: &'static [&'static str],
}

/// A value/label pair. `value` is the stable key stored with a listing,
/// `label` is the seller-facing display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A condition grade with its seller-facing description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub name: &'static str,
    pub description: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category {
        l1: "Art",
        l2: "Drawings and Watercolor Paintings",
        l3: &[
            "Abstract Drawings and Watercolors",
            "Animal Drawings and Watercolors",
            "Figurative Drawings and Watercolors",
            "Interior Drawings and Watercolors",
            "Landscape Drawings and Watercolors",
            "Nude Drawings and Watercolors",
            "Portrait Drawings and Watercolors",
            "Still-life Drawings and Watercolors",
        ],
    },
    Category {
        l1: "Art",
        l2: "Mixed Media",
        l3: &[],
    },
    Category {
        l1: "Art",
        l2: "More Art",
        l3: &[],
    },
    Category {
        l1: "Art",
        l2: "Paintings",
        l3: &[
            "Abstract Paintings",
            "Animal Paintings",
            "Figurative Paintings",
            "Interior Paintings",
            "Landscape Paintings",
            "Nude Paintings",
            "Portrait Paintings",
            "Still-life Paintings",
        ],
    },
    Category {
        l1: "Art",
        l2: "Photography",
        l3: &[
            "Abstract Photography",
            "Black and White Photography",
            "Color Photography",
            "Figurative Photography",
            "Landscape Photography",
            "Nude Photography",
            "Portrait Photography",
            "Still-life Photography",
        ],
    },
    Category {
        l1: "Art",
        l2: "Prints and Multiples",
        l3: &[
            "Abstract Prints",
            "Animal Prints",
            "Figurative Prints",
            "Interior Prints",
            "Landscape Prints",
            "More Prints",
            "Nude Prints",
            "Portrait Prints",
            "Still-life Prints",
        ],
    },
    Category {
        l1: "Art",
        l2: "Sculptures",
        l3: &[
            "Abstract Sculptures",
            "Figurative Sculptures",
            "Nude Sculptures",
            "Still-life Sculptures",
        ],
    },
    Category {
        l1: "Fashion",
        l2: "Accessories",
        l3: &[
            "Babushka",
            "Bandannas",
            "Bandeaus",
            "Beanies",
            "Belts",
            "Berets",
            "Bonnets",
            "Braces",
            "Canes and Walking Sticks",
            "Caps",
            "Cloche Hats",
            "Contour",
            "Corsages",
            "Cravats",
            "Cummerbunds",
            "Fichu",
            "Gauntlets",
            "Gloves",
            "Handheld Fans",
            "Handkerchiefs",
            "Hats",
            "Hoods",
            "Muffs",
            "Neckcloths",
            "Neckties",
            "Sashes",
            "Scarves",
            "Shoes",
            "Sunglasses",
            "Suspenders",
            "Ties",
            "Visors",
            "Waist Belts",
        ],
    },
    Category {
        l1: "Fashion",
        l2: "Books",
        l3: &[
            "Antique Books",
            "Avant Garde Books",
            "Body",
            "Classic",
            "Clothes",
            "Collection",
            "Costumes",
            "Couture",
            "Dandy",
            "Design",
            "Fashion",
            "Fashion Books",
            "Look",
            "Modernist",
            "Retro",
            "Softcover and Paperback",
            "Style",
            "Vintage",
            "Wearable Art",
        ],
    },
    Category {
        l1: "Fashion",
        l2: "Clothing",
        l3: &[
            "Blouses",
            "Coats and Outerwear",
            "Day Dresses",
            "Evening Dresses and Gowns",
            "Jackets",
            "Lingerie",
            "Pants",
            "Shirts",
            "Shoes",
            "Shorts",
            "Skirts",
            "Sportswear",
            "Suits, Outfits and Ensembles",
            "Sweaters",
            "Swimwear",
        ],
    },
    Category {
        l1: "Fashion",
        l2: "Ephemera",
        l3: &[
            "Ashtrays",
            "Barware",
            "Baskets",
            "Boxes",
            "Centerpieces",
            "Ceramics",
            "Children",
            "Clocks",
            "Coatstands",
            "Curiosities",
            "Decorative Mounted Boxes",
            "Decorative Objects",
            "Dry Bar",
            "For The Desk",
            "For The Table",
            "Games",
            "Globes",
            "Jewelry Boxes",
            "Knife Boxes",
            "Miscellaneous",
            "Other",
            "Pillows and Throws",
            "Rugs",
            "Sculptures",
            "Teacaddies and Canisters",
            "Textiles and Quilts",
            "Toys",
            "Trunks and Luggage",
            "Umbrella Stands",
            "Vases",
            "Wine Coolers",
            "Wine Service",
        ],
    },
    Category {
        l1: "Fashion",
        l2: "Handbags and Purses",
        l3: &[
            "Backpacks",
            "Briefcases and Attachés",
            "Clutches",
            "Crossbody Bags and Messenger Bags",
            "Evening Bags and Minaudières",
            "Luggage and Travel Bags",
            "Novelty Bags",
            "Shoulder Bags",
            "Top Handle Bags",
            "Tote Bags",
            "Wallets and Small Accessories",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "Asian Art and Furniture",
        l3: &[
            "Antiquities",
            "Ceramics",
            "Furniture",
            "Lacquer",
            "Metalwork",
            "More Asian Art, Objects and Furniture",
            "Paintings and Screens",
            "Prints",
            "Scholar's Objects",
            "Sculptures and Carvings",
            "Textiles",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "Building and Garden Elements",
        l3: &[
            "Andirons",
            "Architectural Elements",
            "Balustrades and Fixtures",
            "Bathroom Fixtures",
            "Doors and Gates",
            "Fireplace Tools and Chimney Pots",
            "Fireplaces and Mantels",
            "Flooring",
            "Fountains",
            "Garden Ornaments",
            "Panelling",
            "Patio and Garden Furniture",
            "Pedestals and Columns",
            "Planters and Jardinieres",
            "Stairs",
            "Statues",
            "Stone Sinks",
            "Sundials",
            "Urns",
            "Windows",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "Case Pieces and Storage Cabinets",
        l3: &[
            "Apothecary Cabinets",
            "Blanket Chests",
            "Bookcases",
            "Buffets",
            "Cabinets",
            "Commodes and Chests of Drawers",
            "Corner Cupboards",
            "Credenzas",
            "Cupboards",
            "Desks",
            "Dressers",
            "Dry Bars",
            "Linen Presses",
            "Secretaires",
            "Shelves",
            "Sideboards",
            "Vitrines",
            "Wardrobes and Armoires",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "Decorative Objects",
        l3: &[
            "Bowls and Baskets",
            "Boxes",
            "Candle Holders",
            "Clocks",
            "Desk Accessories",
            "Picture Frames",
            "Sculptures",
            "Vases and Vessels",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "Folk Art",
        l3: &[
            "Antiquities",
            "Carnival Art",
            "Ceramics",
            "Decoys",
            "Game Boards",
            "Masks",
            "Mirrors",
            "More Folk Art",
            "Native American Objects",
            "Nautical Objects",
            "Outsider and Self Taught Art",
            "Painted Furniture",
            "Paintings",
            "Political and Patriotic Memorabilia",
            "Posters",
            "Primitives",
            "Quilts",
            "Rugs",
            "Sculptures and Carvings",
            "Signs",
            "Toys",
            "Tribal Art",
            "Weathervanes",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "Lighting",
        l3: &[
            "Chandeliers and Pendants",
            "Floor Lamps",
            "Flush Mount",
            "Lanterns",
            "More Lighting",
            "Table Lamps",
            "Wall Lights and Sconces",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "Mirrors",
        l3: &[
            "Convex Mirrors",
            "Floor Mirrors and Full-Length Mirrors",
            "Girandoles",
            "Mantel Mirrors and Fireplace Mirrors",
            "More Mirrors",
            "Pier Mirrors and Console Mirrors",
            "Sunburst Mirrors",
            "Table Mirrors",
            "Trumeau Mirrors",
            "Wall Mirrors",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "More Furniture and Collectibles",
        l3: &[
            "Bedroom Furniture",
            "Children's Furniture",
            "Collectibles and Curiosities",
            "Home Accents",
            "Racks and Stands",
            "Textiles",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "Rugs and Carpets",
        l3: &[
            "Caucasian Rugs",
            "Central Asian Rugs",
            "Chinese and East Asian Rugs",
            "Indian Rugs",
            "More Carpets",
            "Moroccan and North African Rugs",
            "North and South American Rugs",
            "Persian Rugs",
            "Russian and Scandinavian Rugs",
            "Turkish Rugs",
            "Western European Rugs",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "Seating",
        l3: &[
            "Armchairs",
            "Benches",
            "Bergere Chairs",
            "Canapes",
            "Chairs",
            "Chaise Longues",
            "Club Chairs",
            "Corner Chairs",
            "Daybeds",
            "Dining Room Chairs",
            "Footstools",
            "Living Room Sets",
            "Lounge Chairs",
            "Loveseats",
            "Office Chairs and Desk Chairs",
            "Ottomans and Poufs",
            "Rocking Chairs",
            "Sectional Sofas",
            "Settees",
            "Side Chairs",
            "Slipper Chairs",
            "Sofas",
            "Stools",
            "Swivel Chairs",
            "Windsor Chairs",
            "Wingback Chairs",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "Serveware, Ceramics, Silver and Glass",
        l3: &[
            "Ashtrays",
            "Barware",
            "Butcher Blocks",
            "Centerpieces",
            "Ceramics",
            "Crystal Serveware",
            "Delft and Faience",
            "Dinner Plates",
            "Glass",
            "Knife Boxes",
            "More Dining and Entertaining",
            "Pitchers",
            "Platters and Serveware",
            "Porcelain",
            "Pottery",
            "Serving Bowls",
            "Serving Pieces",
            "Sheffield and Silverplate",
            "Soup Tureens",
            "Sterling Silver",
            "Tableware",
            "Tea Sets",
            "Wine Coolers",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "Tables",
        l3: &[
            "Candle Stands",
            "Card Tables and Tea Tables",
            "Carts and Bar Carts",
            "Center Tables",
            "Coffee and Cocktail Tables",
            "Conference Tables",
            "Console Tables",
            "Demi-lune Tables",
            "Desks and Writing Tables",
            "Dessert Tables and Tilt-top Tables",
            "Dining Room Sets",
            "Dining Room Tables",
            "Drop-leaf and Pembroke Tables",
            "End Tables",
            "Farm Tables",
            "Game Tables",
            "Gueridon",
            "Industrial and Work Tables",
            "Lowboys",
            "Nesting Tables and Stacking Tables",
            "Pedestals",
            "Serving Tables",
            "Side Tables",
            "Sofa Tables",
            "Tables",
            "Tray Tables",
            "Vanities",
        ],
    },
    Category {
        l1: "Furniture",
        l2: "Wall Decorations",
        l3: &[
            "Contemporary Art",
            "Decorative Art",
            "Drawings",
            "Paintings",
            "Photography",
            "Posters",
            "Prints",
            "Shadow Boxes",
            "Shelves and Wall Cabinets",
            "Tapestries",
            "Wall Brackets",
            "Wall-mounted Sculptures",
            "Wallpaper",
        ],
    },
    Category {
        l1: "Jewelry",
        l2: "Bracelets",
        l3: &[
            "Anklets",
            "Bangles",
            "Beaded Bracelets",
            "Chain Bracelets",
            "Charm Bracelets",
            "Clamper Bracelets",
            "Cuff Bracelets",
            "Link Bracelets",
            "Modern Bracelets",
            "More Bracelets",
            "Retro Bracelets",
            "Tennis Bracelets",
        ],
    },
    Category {
        l1: "Jewelry",
        l2: "Brooches",
        l3: &["Brooches"],
    },
    Category {
        l1: "Jewelry",
        l2: "Cufflinks",
        l3: &["Cufflinks"],
    },
    Category {
        l1: "Jewelry",
        l2: "Earrings",
        l3: &[
            "Chandelier Earrings",
            "Clip-on Earrings",
            "Dangle Earrings",
            "Drop Earrings",
            "Hoop Earrings",
            "Lever-Back Earrings",
            "More Earrings",
            "Stud Earrings",
        ],
    },
    Category {
        l1: "Jewelry",
        l2: "Loose Gemstones",
        l3: &[],
    },
    Category {
        l1: "Jewelry",
        l2: "More Jewelry and Watches",
        l3: &["More Jewelry"],
    },
    Category {
        l1: "Jewelry",
        l2: "Necklaces",
        l3: &[
            "Beaded Necklaces",
            "Chain Necklaces",
            "Choker Necklaces",
            "Drop Necklaces",
            "Link Necklaces",
            "More Necklaces",
            "Multi-Strand Necklaces",
            "Necklace Enhancers",
            "Pendant Necklaces",
            "Rope Necklaces",
        ],
    },
    Category {
        l1: "Jewelry",
        l2: "Objets d'Art and Vertu",
        l3: &[
            "Boxes and Cases",
            "Desk Accessories",
            "Enamel Frames and Objects",
            "Figurines and Sculptures",
            "Frames",
            "Models and Miniatures",
            "More Objets d'Art and Vertu",
            "Vanity Items",
        ],
    },
    Category {
        l1: "Jewelry",
        l2: "Rings",
        l3: &[
            "Band Rings",
            "Bridal Rings",
            "Cluster Rings",
            "Cocktail Rings",
            "Dome Rings",
            "Engagement Rings",
            "Fashion Rings",
            "More Rings",
            "Signet Rings",
            "Solitaire Rings",
            "Three-Stone Rings",
            "Wedding Rings",
        ],
    },
    Category {
        l1: "Jewelry",
        l2: "Silver, Flatware and Silverplate",
        l3: &[
            "Barware",
            "Candleholders and Candelabra",
            "Centerpieces and Tazzas",
            "Coffee and Tea Sets",
            "Dinnerware and Flatware Sets",
            "Flatware and Serving Pieces",
            "More Silver, Flatware and Silverplate",
            "Pitchers and Decanters",
            "Platters and Trays",
            "Serving Bowls and Tureens",
            "Silver Bowls",
            "Silver Chargers and Plates",
            "Vases",
        ],
    },
    Category {
        l1: "Jewelry",
        l2: "Watches",
        l3: &["Pocket Watches", "Wrist Watches"],
    },
];

pub const MATERIALS: &[&str] = &[
    "Brass",
    "Bronze",
    "Cherry",
    "Fabric",
    "Glass",
    "Leather",
    "Mahogany",
    "Maple",
    "Marble",
    "Metal",
    "Oak",
    "Pine",
    "Rattan",
    "Solid Wood",
    "Steel",
    "Teak",
    "Velvet",
    "Veneer",
    "Walnut",
    "Wicker",
    "Aluminum",
    "Bamboo",
    "Ceramic",
    "Chrome",
    "Copper",
    "Cotton",
    "Crystal",
    "Ebony",
    "Elm",
    "Iron",
    "Lacquer",
    "Linen",
    "Lucite",
    "Nickel",
    "Plastic",
    "Porcelain",
    "Rosewood",
    "Silk",
    "Silver",
    "Stone",
    "Suede",
    "Wool",
];

pub const WEAR_LEVELS: &[LabeledOption] = &[
    LabeledOption {
        value: "consistent",
        label: "Wear consistent with age and use",
    },
    LabeledOption {
        value: "minor-losses",
        label: "Minor Losses",
    },
    LabeledOption {
        value: "minor-structural",
        label: "Minor Structural Damages",
    },
    LabeledOption {
        value: "minor-fading",
        label: "Minor Fading",
    },
];

pub const RESTORATIONS: &[&str] = &[
    "Repairs",
    "Replacements",
    "Refinishing",
    "Reupholstery",
    "Reweaving",
    "Rewiring",
    "Additions or Alterations to Original",
];

pub const WEIGHT_CLASSES: &[LabeledOption] = &[
    LabeledOption {
        value: "less-40",
        label: "Less than 40 lbs (<18 kilos)",
    },
    LabeledOption {
        value: "40-70",
        label: "Between 40-70 lbs (18-31 kilos)",
    },
    LabeledOption {
        value: "70-200",
        label: "Between 70-200 lbs (31-90 kilos)",
    },
    LabeledOption {
        value: "more-200",
        label: "More than 200 lbs (90+ kilos)",
    },
];

pub const ATTRIBUTIONS: &[LabeledOption] = &[
    LabeledOption {
        value: "attributed-to",
        label: "Attributed To",
    },
    LabeledOption {
        value: "by",
        label: "By",
    },
    LabeledOption {
        value: "by-documented",
        label: "By and Documented",
    },
    LabeledOption {
        value: "style-of",
        label: "In the Style of",
    },
    LabeledOption {
        value: "unattributed",
        label: "Unattributed",
    },
];

pub const CREATORS: &[LabeledOption] = &[
    LabeledOption {
        value: "charles-eames",
        label: "Charles Eames",
    },
    LabeledOption {
        value: "ray-eames",
        label: "Ray Eames",
    },
    LabeledOption {
        value: "hans-wegner",
        label: "Hans Wegner",
    },
    LabeledOption {
        value: "arne-jacobsen",
        label: "Arne Jacobsen",
    },
    LabeledOption {
        value: "george-nakashima",
        label: "George Nakashima",
    },
    LabeledOption {
        value: "mies-van-der-rohe",
        label: "Mies van der Rohe",
    },
    LabeledOption {
        value: "le-corbusier",
        label: "Le Corbusier",
    },
    LabeledOption {
        value: "isamu-noguchi",
        label: "Isamu Noguchi",
    },
    LabeledOption {
        value: "finn-juhl",
        label: "Finn Juhl",
    },
    LabeledOption {
        value: "eero-saarinen",
        label: "Eero Saarinen",
    },
    LabeledOption {
        value: "florence-knoll",
        label: "Florence Knoll",
    },
    LabeledOption {
        value: "marcel-breuer",
        label: "Marcel Breuer",
    },
    LabeledOption {
        value: "alvar-aalto",
        label: "Alvar Aalto",
    },
    LabeledOption {
        value: "wendell-castle",
        label: "Wendell Castle",
    },
    LabeledOption {
        value: "vladimir-kagan",
        label: "Vladimir Kagan",
    },
    LabeledOption {
        value: "paul-evans",
        label: "Paul Evans",
    },
    LabeledOption {
        value: "philippe-starck",
        label: "Philippe Starck",
    },
    LabeledOption {
        value: "ettore-sottsass",
        label: "Ettore Sottsass",
    },
    LabeledOption {
        value: "jean-prouve",
        label: "Jean Prouvé",
    },
    LabeledOption {
        value: "charlotte-perriand",
        label: "Charlotte Perriand",
    },
    LabeledOption {
        value: "ludwig-mies-van-der-rohe",
        label: "Ludwig Mies van der Rohe",
    },
    LabeledOption {
        value: "herman-miller",
        label: "Herman Miller",
    },
    LabeledOption {
        value: "knoll",
        label: "Knoll",
    },
    LabeledOption {
        value: "vitra",
        label: "Vitra",
    },
    LabeledOption {
        value: "thonet",
        label: "Thonet",
    },
    LabeledOption {
        value: "cassina",
        label: "Cassina",
    },
    LabeledOption {
        value: "fritz-hansen",
        label: "Fritz Hansen",
    },
    LabeledOption {
        value: "carlo-bugatti",
        label: "Carlo Bugatti",
    },
    LabeledOption {
        value: "gio-ponti",
        label: "Gio Ponti",
    },
    LabeledOption {
        value: "eileen-gray",
        label: "Eileen Gray",
    },
];

pub const ROLES: &[LabeledOption] = &[
    LabeledOption {
        value: "artist",
        label: "Artist",
    },
    LabeledOption {
        value: "author",
        label: "Author",
    },
    LabeledOption {
        value: "designer",
        label: "Designer",
    },
    LabeledOption {
        value: "maker",
        label: "Maker",
    },
];

pub const STYLES: &[LabeledOption] = &[
    LabeledOption {
        value: "art-deco",
        label: "Art Deco",
    },
    LabeledOption {
        value: "art-nouveau",
        label: "Art Nouveau",
    },
    LabeledOption {
        value: "baroque",
        label: "Baroque",
    },
    LabeledOption {
        value: "bauhaus",
        label: "Bauhaus",
    },
    LabeledOption {
        value: "chippendale",
        label: "Chippendale",
    },
    LabeledOption {
        value: "colonial",
        label: "Colonial",
    },
    LabeledOption {
        value: "contemporary",
        label: "Contemporary",
    },
    LabeledOption {
        value: "danish-modern",
        label: "Danish Modern",
    },
    LabeledOption {
        value: "french-provincial",
        label: "French Provincial",
    },
    LabeledOption {
        value: "georgian",
        label: "Georgian",
    },
    LabeledOption {
        value: "gothic",
        label: "Gothic",
    },
    LabeledOption {
        value: "industrial",
        label: "Industrial",
    },
    LabeledOption {
        value: "louis-xiv",
        label: "Louis XIV",
    },
    LabeledOption {
        value: "mid-century-modern",
        label: "Mid-Century Modern",
    },
    LabeledOption {
        value: "minimalist",
        label: "Minimalist",
    },
    LabeledOption {
        value: "neoclassical",
        label: "Neoclassical",
    },
    LabeledOption {
        value: "queen-anne",
        label: "Queen Anne",
    },
    LabeledOption {
        value: "regency",
        label: "Regency",
    },
    LabeledOption {
        value: "scandinavian",
        label: "Scandinavian",
    },
    LabeledOption {
        value: "victorian",
        label: "Victorian",
    },
    LabeledOption {
        value: "arts-and-crafts",
        label: "Arts and Crafts",
    },
    LabeledOption {
        value: "biedermeier",
        label: "Biedermeier",
    },
    LabeledOption {
        value: "brutalist",
        label: "Brutalist",
    },
    LabeledOption {
        value: "chinoiserie",
        label: "Chinoiserie",
    },
    LabeledOption {
        value: "empire",
        label: "Empire",
    },
    LabeledOption {
        value: "federal",
        label: "Federal",
    },
    LabeledOption {
        value: "hollywood-regency",
        label: "Hollywood Regency",
    },
    LabeledOption {
        value: "louis-xv",
        label: "Louis XV",
    },
    LabeledOption {
        value: "louis-xvi",
        label: "Louis XVI",
    },
    LabeledOption {
        value: "modernist",
        label: "Modernist",
    },
    LabeledOption {
        value: "postmodern",
        label: "Postmodern",
    },
    LabeledOption {
        value: "primitive",
        label: "Primitive",
    },
    LabeledOption {
        value: "rococo",
        label: "Rococo",
    },
    LabeledOption {
        value: "rustic",
        label: "Rustic",
    },
    LabeledOption {
        value: "shaker",
        label: "Shaker",
    },
];

pub const COUNTRIES: &[LabeledOption] = &[
    LabeledOption {
        value: "AF",
        label: "Afghanistan",
    },
    LabeledOption {
        value: "AL",
        label: "Albania",
    },
    LabeledOption {
        value: "DZ",
        label: "Algeria",
    },
    LabeledOption {
        value: "AR",
        label: "Argentina",
    },
    LabeledOption {
        value: "AM",
        label: "Armenia",
    },
    LabeledOption {
        value: "AU",
        label: "Australia",
    },
    LabeledOption {
        value: "AT",
        label: "Austria",
    },
    LabeledOption {
        value: "AZ",
        label: "Azerbaijan",
    },
    LabeledOption {
        value: "BD",
        label: "Bangladesh",
    },
    LabeledOption {
        value: "BY",
        label: "Belarus",
    },
    LabeledOption {
        value: "BE",
        label: "Belgium",
    },
    LabeledOption {
        value: "BR",
        label: "Brazil",
    },
    LabeledOption {
        value: "BG",
        label: "Bulgaria",
    },
    LabeledOption {
        value: "KH",
        label: "Cambodia",
    },
    LabeledOption {
        value: "CA",
        label: "Canada",
    },
    LabeledOption {
        value: "CL",
        label: "Chile",
    },
    LabeledOption {
        value: "CN",
        label: "China",
    },
    LabeledOption {
        value: "CO",
        label: "Colombia",
    },
    LabeledOption {
        value: "HR",
        label: "Croatia",
    },
    LabeledOption {
        value: "CU",
        label: "Cuba",
    },
    LabeledOption {
        value: "CZ",
        label: "Czech Republic",
    },
    LabeledOption {
        value: "DK",
        label: "Denmark",
    },
    LabeledOption {
        value: "EG",
        label: "Egypt",
    },
    LabeledOption {
        value: "EE",
        label: "Estonia",
    },
    LabeledOption {
        value: "FI",
        label: "Finland",
    },
    LabeledOption {
        value: "FR",
        label: "France",
    },
    LabeledOption {
        value: "GE",
        label: "Georgia",
    },
    LabeledOption {
        value: "DE",
        label: "Germany",
    },
    LabeledOption {
        value: "GR",
        label: "Greece",
    },
    LabeledOption {
        value: "HK",
        label: "Hong Kong",
    },
    LabeledOption {
        value: "HU",
        label: "Hungary",
    },
    LabeledOption {
        value: "IS",
        label: "Iceland",
    },
    LabeledOption {
        value: "IN",
        label: "India",
    },
    LabeledOption {
        value: "ID",
        label: "Indonesia",
    },
    LabeledOption {
        value: "IR",
        label: "Iran",
    },
    LabeledOption {
        value: "IQ",
        label: "Iraq",
    },
    LabeledOption {
        value: "IE",
        label: "Ireland",
    },
    LabeledOption {
        value: "IL",
        label: "Israel",
    },
    LabeledOption {
        value: "IT",
        label: "Italy",
    },
    LabeledOption {
        value: "JP",
        label: "Japan",
    },
    LabeledOption {
        value: "KZ",
        label: "Kazakhstan",
    },
    LabeledOption {
        value: "KE",
        label: "Kenya",
    },
    LabeledOption {
        value: "KR",
        label: "South Korea",
    },
    LabeledOption {
        value: "LV",
        label: "Latvia",
    },
    LabeledOption {
        value: "LT",
        label: "Lithuania",
    },
    LabeledOption {
        value: "LU",
        label: "Luxembourg",
    },
    LabeledOption {
        value: "MY",
        label: "Malaysia",
    },
    LabeledOption {
        value: "MX",
        label: "Mexico",
    },
    LabeledOption {
        value: "MA",
        label: "Morocco",
    },
    LabeledOption {
        value: "NL",
        label: "Netherlands",
    },
    LabeledOption {
        value: "NZ",
        label: "New Zealand",
    },
    LabeledOption {
        value: "NG",
        label: "Nigeria",
    },
    LabeledOption {
        value: "NO",
        label: "Norway",
    },
    LabeledOption {
        value: "PK",
        label: "Pakistan",
    },
    LabeledOption {
        value: "PE",
        label: "Peru",
    },
    LabeledOption {
        value: "PH",
        label: "Philippines",
    },
    LabeledOption {
        value: "PL",
        label: "Poland",
    },
    LabeledOption {
        value: "PT",
        label: "Portugal",
    },
    LabeledOption {
        value: "RO",
        label: "Romania",
    },
    LabeledOption {
        value: "RU",
        label: "Russia",
    },
    LabeledOption {
        value: "SA",
        label: "Saudi Arabia",
    },
    LabeledOption {
        value: "RS",
        label: "Serbia",
    },
    LabeledOption {
        value: "SG",
        label: "Singapore",
    },
    LabeledOption {
        value: "SK",
        label: "Slovakia",
    },
    LabeledOption {
        value: "SI",
        label: "Slovenia",
    },
    LabeledOption {
        value: "ZA",
        label: "South Africa",
    },
    LabeledOption {
        value: "ES",
        label: "Spain",
    },
    LabeledOption {
        value: "SE",
        label: "Sweden",
    },
    LabeledOption {
        value: "CH",
        label: "Switzerland",
    },
    LabeledOption {
        value: "TW",
        label: "Taiwan",
    },
    LabeledOption {
        value: "TH",
        label: "Thailand",
    },
    LabeledOption {
        value: "TR",
        label: "Turkey",
    },
    LabeledOption {
        value: "UA",
        label: "Ukraine",
    },
    LabeledOption {
        value: "AE",
        label: "United Arab Emirates",
    },
    LabeledOption {
        value: "GB",
        label: "United Kingdom",
    },
    LabeledOption {
        value: "US",
        label: "United States",
    },
    LabeledOption {
        value: "VN",
        label: "Vietnam",
    },
];

pub const CONDITIONS: &[Condition] = &[
    Condition {
        name: "Distressed",
        description: "Visible signs of previous use that may include scratches, gouges, cracks and fissures and worn corners. May have significant losses, fading or structural instability.",
    },
    Condition {
        name: "Fair",
        description: "Shows light scratches and wear from previous use but remains in fair condition. May have some structural issues, including minor instability.",
    },
    Condition {
        name: "Good",
        description: "Lightly used, with very light scratches, or minor cosmetic wear, but has no structural issues. Most antique and vintage items fit this condition.",
    },
    Condition {
        name: "Excellent",
        description: "Like new or has never been used. Absolutely no scratches or wear. Has no structural issues and is in perfect condition.",
    },
    Condition {
        name: "New",
        description: "Brand-new, unused item, not previously owned. Shows absolutely no signs of wear.",
    },
];

#[rustfmt::skip]
pub const PERIODS: &[&str] = &[
    "2020-", "2010-2019", "2000-2009",
    "1990-1999", "1980-1989", "1970-1979", "1960-1969", "1950-1959", "1940-1949", "1930-1939", "1920-1929", "1910-1919", "1900-1909",
    "1890-1899", "1880-1889", "1870-1879", "1860-1869", "1850-1859", "1840-1849", "1830-1839", "1820-1829", "1810-1819", "1800-1809",
    "1790-1799", "1780-1789", "1770-1779", "1760-1769", "1750-1759", "1740-1749", "1730-1739", "1720-1729", "1710-1719", "1700-1709",
    "1690-1699", "1680-1689", "1670-1679", "1660-1669", "1650-1659", "1640-1649", "1630-1639", "1620-1629", "1610-1619", "1600-1609",
    "21st Century",
    "20th Century",
    "19th Century",
    "18th Century",
    "17th Century",
    "16th Century",
];

/// All category paths in `l1 > l2` and `l1 > l2 > l3` form.
pub fn category_paths() -> Vec<String> {
    let mut paths = Vec::new();
    for cat in CATEGORIES {
        paths.push(format!("{} > {}", cat.l1, cat.l2));
        for sub in cat.l3 {
            paths.push(format!("{} > {} > {}", cat.l1, cat.l2, sub));
        }
    }
    paths
}

/// All subcategory (l2) names, in catalog order.
pub fn l2_categories() -> Vec<&'static str> {
    CATEGORIES.iter().map(|c| c.l2).collect()
}

/// Distinct top-level (l1) names, sorted alphabetically.
pub fn l1_categories() -> Vec<&'static str> {
    let mut l1s: Vec<&'static str> = Vec::new();
    for cat in CATEGORIES {
        if !l1s.contains(&cat.l1) {
            l1s.push(cat.l1);
        }
    }
    l1s.sort_unstable();
    l1s
}

/// Look up a catalog row by exact l1 and l2 names.
pub fn find_category(l1: &str, l2: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.l1 == l1 && c.l2 == l2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(CATEGORIES.len(), 36);
        assert_eq!(MATERIALS.len(), 42);
        assert_eq!(WEAR_LEVELS.len(), 4);
        assert_eq!(RESTORATIONS.len(), 7);
        assert_eq!(WEIGHT_CLASSES.len(), 4);
        assert_eq!(ATTRIBUTIONS.len(), 5);
        assert_eq!(CREATORS.len(), 30);
        assert_eq!(ROLES.len(), 4);
        assert_eq!(STYLES.len(), 35);
        assert_eq!(COUNTRIES.len(), 77);
        assert_eq!(CONDITIONS.len(), 5);
        assert_eq!(PERIODS.len(), 49);
    }

    #[test]
    fn test_l1_categories_sorted_and_distinct() {
        assert_eq!(l1_categories(), vec!["Art", "Fashion", "Furniture", "Jewelry"]);
    }

    #[test]
    fn test_l2_categories_in_catalog_order() {
        let l2s = l2_categories();
        assert_eq!(l2s.len(), 36);
        assert_eq!(l2s[0], "Drawings and Watercolor Paintings");
        assert_eq!(l2s[35], "Watches");
    }

    #[test]
    fn test_category_paths_include_leaves() {
        let paths = category_paths();
        assert!(paths.contains(&"Furniture > Tables".to_string()));
        assert!(paths.contains(&"Furniture > Tables > Coffee and Cocktail Tables".to_string()));
        assert!(paths.contains(&"Art > Mixed Media".to_string()));
    }

    #[test]
    fn test_find_category() {
        let cat = find_category("Furniture", "Seating").unwrap();
        assert!(cat.l3.contains(&"Armchairs"));
        assert!(find_category("Furniture", "Spaceships").is_none());
    }

    #[test]
    fn test_materials_distinct() {
        let mut seen = std::collections::HashSet::new();
        for material in MATERIALS {
            assert!(seen.insert(*material), "duplicate material: {}", material);
        }
    }

    #[test]
    fn test_periods_ordering() {
        assert_eq!(PERIODS[0], "2020-");
        assert_eq!(PERIODS[1], "2010-2019");
        assert_eq!(PERIODS[42], "1600-1609");
        assert_eq!(PERIODS[48], "16th Century");
    }

    #[test]
    fn test_periods_cover_decades_back_to_1600() {
        for decade in (1600..2020).step_by(10) {
            let bucket = format!("{}-{}", decade, decade + 9);
            assert!(
                PERIODS.contains(&bucket.as_str()),
                "missing decade bucket: {}",
                bucket
            );
        }
    }

    #[test]
    fn test_weight_class_values() {
        let values: Vec<&str> = WEIGHT_CLASSES.iter().map(|w| w.value).collect();
        assert_eq!(values, vec!["less-40", "40-70", "70-200", "more-200"]);
    }

    #[test]
    fn test_conditions_include_new_last() {
        assert_eq!(CONDITIONS[4].name, "New");
        assert!(CONDITIONS.iter().all(|c| !c.description.is_empty()));
    }

    #[test]
    fn test_countries_include_major_origins() {
        let lookup = |code: &str| COUNTRIES.iter().find(|c| c.value == code).map(|c| c.label);
        assert_eq!(lookup("US"), Some("United States"));
        assert_eq!(lookup("GB"), Some("United Kingdom"));
        assert_eq!(lookup("DK"), Some("Denmark"));
        assert_eq!(lookup("KR"), Some("South Korea"));
    }

    #[test]
    fn test_country_codes_are_iso_alpha2() {
        for country in COUNTRIES {
            assert_eq!(country.value.len(), 2, "bad code: {}", country.value);
            assert!(country.value.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}

pub const SCHEMA: &str = r#"
-- Cafes, one row per venue
CREATE TABLE IF NOT EXISTS cafes (
    -- AUTOINCREMENT keeps ids monotonic: a deleted cafe's id is never reused
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    map_url TEXT NOT NULL,
    img_url TEXT NOT NULL,

    -- Free-text place name, not normalized or geocoded
    location TEXT NOT NULL,

    -- Textual capacity description, e.g. "20-30"
    seats TEXT NOT NULL,

    -- Amenity flags
    has_toilet INTEGER NOT NULL DEFAULT 0,
    has_wifi INTEGER NOT NULL DEFAULT 0,
    has_sockets INTEGER NOT NULL DEFAULT 0,
    can_take_calls INTEGER NOT NULL DEFAULT 0,

    -- Textual price, e.g. "£2.50"; NULL = unknown
    coffee_price TEXT
);

-- Create indexes
CREATE INDEX IF NOT EXISTS idx_cafes_location ON cafes(location);
"#;

pub mod artist;
pub mod artist_ipi;

pub use artist::Entity as Artist;
pub use artist_ipi::Entity as ArtistIpi;

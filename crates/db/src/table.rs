use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    Password,
    Age,
    ProfileImageUrl,
    CreatedAt,
    UpdatedAt,
}

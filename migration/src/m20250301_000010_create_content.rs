use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_hotels::Hotel;
use super::m20250301_000004_create_guests::Guest;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(pk_auto(Blog::Id))
                    .col(integer(Blog::HotelId).not_null())
                    .col(string_len(Blog::Title, 255).not_null())
                    .col(text(Blog::Content).not_null())
                    .col(string_len_null(Blog::ImageUrl, 500))
                    .col(string_len(Blog::Author, 100).not_null())
                    .col(boolean(Blog::IsPublished).not_null().default(false))
                    .col(
                        timestamp_with_time_zone(Blog::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_hotel")
                            .from(Blog::Table, Blog::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventBooking::Table)
                    .if_not_exists()
                    .col(pk_auto(EventBooking::Id))
                    .col(integer(EventBooking::HotelId).not_null())
                    .col(integer(EventBooking::GuestId).not_null())
                    .col(string_len(EventBooking::EventType, 20).not_null())
                    .col(date(EventBooking::StartDate).not_null())
                    .col(date(EventBooking::EndDate).not_null())
                    .col(integer(EventBooking::Attendees).not_null())
                    .col(text_null(EventBooking::BudgetNotes))
                    .col(text_null(EventBooking::SpecialRequests))
                    .col(string_len(EventBooking::Status, 20).not_null())
                    .col(
                        timestamp_with_time_zone(EventBooking::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_booking_hotel")
                            .from(EventBooking::Table, EventBooking::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_booking_guest")
                            .from(EventBooking::Table, EventBooking::GuestId)
                            .to(Guest::Table, Guest::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContactMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ContactMessage::Id))
                    .col(string_len(ContactMessage::Name, 255).not_null())
                    .col(string_len(ContactMessage::Email, 255).not_null())
                    .col(string_len(ContactMessage::Subject, 255).not_null())
                    .col(text(ContactMessage::Message).not_null())
                    .col(string_len(ContactMessage::Status, 20).not_null())
                    .col(
                        timestamp_with_time_zone(ContactMessage::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PromoBanner::Table)
                    .if_not_exists()
                    .col(pk_auto(PromoBanner::Id))
                    .col(integer(PromoBanner::HotelId).not_null())
                    .col(string_len(PromoBanner::Title, 255).not_null())
                    .col(string_len(PromoBanner::Message, 500).not_null())
                    .col(string_len_null(PromoBanner::LinkText, 100))
                    .col(string_len_null(PromoBanner::LinkUrl, 500))
                    .col(string_len(PromoBanner::Style, 20).not_null())
                    .col(boolean(PromoBanner::IsActive).not_null().default(true))
                    .col(
                        timestamp_with_time_zone(PromoBanner::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_promo_banner_hotel")
                            .from(PromoBanner::Table, PromoBanner::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DiscountCoupon::Table)
                    .if_not_exists()
                    .col(pk_auto(DiscountCoupon::Id))
                    .col(integer(DiscountCoupon::HotelId).not_null())
                    .col(string_len(DiscountCoupon::Code, 50).not_null().unique_key())
                    .col(decimal_len(DiscountCoupon::DiscountPercent, 5, 2).not_null())
                    .col(date(DiscountCoupon::ValidFrom).not_null())
                    .col(date(DiscountCoupon::ValidTo).not_null())
                    .col(boolean(DiscountCoupon::IsActive).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discount_coupon_hotel")
                            .from(DiscountCoupon::Table, DiscountCoupon::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscountCoupon::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PromoBanner::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ContactMessage::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(EventBooking::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Blog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Blog {
    Table,
    Id,
    HotelId,
    Title,
    Content,
    ImageUrl,
    Author,
    IsPublished,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum EventBooking {
    Table,
    Id,
    HotelId,
    GuestId,
    EventType,
    StartDate,
    EndDate,
    Attendees,
    BudgetNotes,
    SpecialRequests,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum ContactMessage {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum PromoBanner {
    Table,
    Id,
    HotelId,
    Title,
    Message,
    LinkText,
    LinkUrl,
    Style,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum DiscountCoupon {
    Table,
    Id,
    HotelId,
    Code,
    DiscountPercent,
    ValidFrom,
    ValidTo,
    IsActive,
}

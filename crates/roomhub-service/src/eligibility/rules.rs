//! Individual admission rules.
//!
//! Each rule inspects records that have already been resolved and either
//! passes them through or refuses with the matching error kind. None of
//! them touch the store.

use roomhub_core::error::AppError;
use roomhub_core::result::AppResult;
use roomhub_core::types::{RoomId, UserId};
use roomhub_entity::booking::Booking;
use roomhub_entity::enrollment::Enrollment;
use roomhub_entity::room::Room;
use roomhub_entity::ticket::{Ticket, TicketType};

/// A user may hold at most one booking.
pub fn ensure_no_booking(user_id: UserId, existing: Option<&Booking>) -> AppResult<()> {
    match existing {
        Some(booking) => Err(AppError::already_booked(format!(
            "User {user_id} already holds booking {}",
            booking.id
        ))),
        None => Ok(()),
    }
}

pub fn ensure_enrolled(user_id: UserId, enrollment: Option<Enrollment>) -> AppResult<Enrollment> {
    enrollment
        .ok_or_else(|| AppError::not_eligible(format!("User {user_id} has no enrollment")))
}

/// The enrollment must carry a ticket that has been paid for.
pub fn ensure_ticket_paid(enrollment: &Enrollment, ticket: Option<Ticket>) -> AppResult<Ticket> {
    let ticket = ticket.ok_or_else(|| {
        AppError::not_eligible(format!("Enrollment {} has no ticket", enrollment.id))
    })?;
    if ticket.status.is_awaiting_payment() {
        return Err(AppError::not_eligible(format!(
            "Ticket {} is {}",
            ticket.id, ticket.status
        )));
    }
    Ok(ticket)
}

/// Only in-person tickets that include lodging grant a room.
pub fn ensure_ticket_grants_room(
    ticket: &Ticket,
    ticket_type: Option<TicketType>,
) -> AppResult<TicketType> {
    let ticket_type = ticket_type.ok_or_else(|| {
        AppError::not_eligible(format!(
            "Ticket type {} of ticket {} not found",
            ticket.ticket_type_id, ticket.id
        ))
    })?;
    if !ticket_type.grants_hotel_room() {
        return Err(AppError::not_eligible(format!(
            "Ticket type {} does not include hotel lodging",
            ticket_type.id
        )));
    }
    Ok(ticket_type)
}

/// `requested` is `None` when the caller supplied no usable room id.
pub fn ensure_room_exists(requested: Option<RoomId>, room: Option<Room>) -> AppResult<Room> {
    match (requested, room) {
        (Some(_), Some(room)) => Ok(room),
        (Some(id), None) => Err(AppError::room_not_found(format!("Room {id} not found"))),
        (None, _) => Err(AppError::room_not_found("No valid room id supplied")),
    }
}

/// Refuse when the room has no free place. A booking being moved that
/// already sits in the room does not count against it.
pub fn ensure_vacancy(room: &Room, occupancy: u32, moving: Option<&Booking>) -> AppResult<()> {
    let occupancy = match moving {
        Some(booking) if booking.occupies(room.id) => occupancy.saturating_sub(1),
        _ => occupancy,
    };
    if !room.has_vacancy(occupancy) {
        return Err(AppError::room_full(format!(
            "Room {} is at capacity ({})",
            room.id,
            room.capacity()
        )));
    }
    Ok(())
}

/// A booking that exists must belong to the acting user.
pub fn ensure_owner(user_id: UserId, booking: Option<&Booking>) -> AppResult<()> {
    match booking {
        Some(booking) if !booking.is_owned_by(user_id) => Err(AppError::not_permitted(format!(
            "Booking {} does not belong to user {user_id}",
            booking.id
        ))),
        _ => Ok(()),
    }
}
